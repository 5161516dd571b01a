//! HTML rendering for the storefront page.
//!
//! Every function here is pure: it takes books, cart state and filters and returns markup.
//! The listing is always regenerated in full so that per-book cart counts and disabled
//! add-to-cart controls stay consistent with the cart.

use std::fmt::Write;
use crate::books::CATEGORIES;
use crate::books::dto::BookDto;
use crate::cart::domain::model::Cart;
use crate::cart::dto::CartSummaryDto;
use crate::catalog::domain::filter::BookFilter;
use crate::core::domain::Configuration;
use crate::storefront::domain::{format_category, stock_status};
use crate::utils::html::escape_html;
use crate::utils::money::format_price;

pub const ADD_TO_CART_LABEL: &str = "🛒 Add to Cart";
pub const CANNOT_ADD_LABEL: &str = "❌ Cannot Add More";
pub const NO_RESULTS_TITLE: &str = "📚 No books found";
pub const NO_RESULTS_HINT: &str = "Try adjusting your search terms or category filter.";

/// Text of the cart readout, e.g. `🛒 Cart: 2 items ($28.49)`.
pub fn render_cart_summary(summary: &CartSummaryDto) -> String {
    format!("🛒 Cart: {} items (${})", summary.item_count, summary.total)
}

pub fn render_no_results() -> String {
    format!("<div class=\"no-results\"><h2>{}</h2><p>{}</p></div>", NO_RESULTS_TITLE, NO_RESULTS_HINT)
}

/// One card for `book`. The add control is disabled once the cart holds every copy in stock.
pub fn render_book_card(book: &BookDto, cart_quantity: u32, filter: &BookFilter) -> String {
    let status = stock_status(book.stock);
    let sold_out = book.stock.saturating_sub(cart_quantity) == 0;
    let mut html = String::new();
    let _ = write!(html, "<div class=\"book-card\" data-isbn=\"{}\">", escape_html(&book.isbn));
    let _ = write!(html, "<div class=\"category-badge\">{}</div>", escape_html(&format_category(&book.category)));
    let _ = write!(html, "<h3 class=\"book-title\">{}</h3>", escape_html(&book.title));
    let _ = write!(html, "<p class=\"book-author\">by {}</p>", escape_html(&book.author));
    html.push_str("<div class=\"book-details\">");
    push_detail(&mut html, "Year:", book.year.to_string().as_str());
    push_detail(&mut html, "ISBN:", escape_html(&book.isbn).as_str());
    push_detail(&mut html, "Status:", format!("<span class=\"stock-indicator {}\">{} {}</span>",
                                              status.tag(), status.band.icon(), status.label).as_str());
    push_detail(&mut html, "🛒 In Cart:", cart_quantity.to_string().as_str());
    html.push_str("</div>");
    let _ = write!(html, "<div class=\"book-price\">${}</div>", format_price(book.price_cents));
    html.push_str("<form class=\"add-to-cart-form\" method=\"post\" action=\"/cart\">");
    let _ = write!(html, "<input type=\"hidden\" name=\"isbn\" value=\"{}\">", escape_html(&book.isbn));
    let _ = write!(html, "<input type=\"hidden\" name=\"search\" value=\"{}\">", escape_html(&filter.search));
    let _ = write!(html, "<input type=\"hidden\" name=\"category\" value=\"{}\">", escape_html(filter.category_tag()));
    if sold_out {
        let _ = write!(html, "<button class=\"add-to-cart\" type=\"submit\" disabled>{}</button>", CANNOT_ADD_LABEL);
    } else {
        let _ = write!(html, "<button class=\"add-to-cart\" type=\"submit\">{}</button>", ADD_TO_CART_LABEL);
    }
    html.push_str("</form></div>");
    html
}

fn push_detail(html: &mut String, label: &str, value_html: &str) {
    let _ = write!(html, "<div class=\"book-detail\"><span class=\"detail-label\">{}</span>\
        <span class=\"detail-value\">{}</span></div>", label, value_html);
}

/// The listing: one card per book, or the no-results block when `books` is empty.
pub fn render_books(books: &[BookDto], cart: &Cart, filter: &BookFilter) -> String {
    if books.is_empty() {
        return render_no_results();
    }
    books.iter()
        .map(|b| render_book_card(b, cart.quantity(b.isbn.as_str()), filter))
        .collect::<Vec<String>>()
        .join("")
}

fn render_category_options(selected: &str) -> String {
    let mut html = String::new();
    let _ = write!(html, "<option value=\"\"{}>All Categories</option>",
                   if selected.is_empty() { " selected" } else { "" });
    for tag in CATEGORIES {
        let _ = write!(html, "<option value=\"{}\"{}>{}</option>", tag,
                       if selected == tag { " selected" } else { "" }, format_category(tag));
    }
    html
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
    #booksGrid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1rem}\
    .book-card{border:1px solid #ddd;border-radius:8px;padding:1rem}\
    .out-of-stock{color:#b00}.low-stock{color:#b60}.in-stock{color:#070}\
    .no-results{grid-column:1/-1;text-align:center}";

// Re-renders the listing on every keystroke and selector change; without script the form submits.
const PAGE_SCRIPT: &str = "const f=document.getElementById('filters');\
    const g=document.getElementById('booksGrid');\
    function r(){fetch('/books?'+new URLSearchParams(new FormData(f))).then(x=>x.text()).then(h=>{g.innerHTML=h;});}\
    document.getElementById('searchBox').addEventListener('input',r);\
    document.getElementById('categoryFilter').addEventListener('change',r);";

/// The whole document: filter controls, cart readout and listing.
pub fn render_page(config: &Configuration, filter: &BookFilter, listing: &str, summary: &CartSummaryDto) -> String {
    let title = escape_html(&config.store_name);
    let mut html = String::new();
    let _ = write!(html, "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
        <title>{}</title><style>{}</style></head><body>", title, PAGE_STYLE);
    let _ = write!(html, "<header><h1>📚 {}</h1><div id=\"cartInfo\" class=\"cart-info\">{}</div></header>",
                   title, render_cart_summary(summary));
    let _ = write!(html, "<form id=\"filters\" method=\"get\" action=\"/\">\
        <input id=\"searchBox\" type=\"search\" name=\"search\" placeholder=\"Search by title or author...\" value=\"{}\">\
        <select id=\"categoryFilter\" name=\"category\">{}</select>\
        <noscript><button type=\"submit\">Search</button></noscript></form>",
                   escape_html(&filter.search), render_category_options(filter.category_tag()));
    let _ = write!(html, "<main id=\"booksGrid\" class=\"books-grid\">{}</main>", listing);
    let _ = write!(html, "<script>{}</script></body></html>", PAGE_SCRIPT);
    html
}
