//! Terminal output for search results

use menu_search::{highlight, Category, Product};
use owo_colors::{OwoColorize, Stream};

/// Print a hint on stderr
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".if_supports_color(Stream::Stderr, |t| t.blue()), message);
}

/// Print a product list, highlighting `query` in names when given
pub fn products(products: &[&Product], query: Option<&str>) {
    for product in products {
        let name = match query {
            Some(query) => emphasize(&product.name, query),
            None => product.name.clone(),
        };
        println!("{:>6}  {}  {:.2}", product.id, name, product.price);
        if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
            println!("        {}", description.if_supports_color(Stream::Stdout, |t| t.dimmed()));
        }
    }
}

/// Print a category list, highlighting `query` in names
pub fn categories(categories: &[&Category], query: &str) {
    for category in categories {
        println!("{:>6}  {}", category.id, emphasize(&category.name, query));
    }
}

/// Print one suggestion per line
pub fn suggestions(suggestions: &[String]) {
    for suggestion in suggestions {
        println!("{suggestion}");
    }
}

/// Wrap the first occurrence of `query` in bold when stdout supports color
fn emphasize(text: &str, query: &str) -> String {
    match highlight(text, query) {
        Some(h) => format!(
            "{}{}{}",
            h.before,
            h.matched.if_supports_color(Stream::Stdout, |t| t.bold()),
            h.after
        ),
        None => text.to_string(),
    }
}
