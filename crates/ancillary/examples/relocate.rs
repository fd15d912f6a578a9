//! Example: relocate widgets on a page, then move them again by toggling
//! body classes the way a theme customizer would.
//!
//! Run with `RUST_LOG=debug` to see diagnostics.

use ancillary::{Ancillary, Config};
use ancillary_html::{HtmlParser, HtmlSerializer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

const PAGE: &str = r#"
<!DOCTYPE html>
<html>
  <body class="ancillary-theme-search-position-header ancillary-theme-cart-position-sidebar">
    <div data-nc-base="theme">
      <header data-nc-container="header"><h1>Shop</h1></header>
      <aside data-nc-container="sidebar"></aside>
      <div class="staging">
        <form data-nc-element="search"><input name="q"></form>
        <div data-nc-element="cart">Cart (2)</div>
        <div data-nc-element="promo">Free shipping</div>
      </div>
    </div>
  </body>
</html>
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = HtmlParser::new().parse(PAGE)?;
    let base = doc
        .query_attribute("data-nc-base", "theme")
        .context("page has no ancillary base")?;

    let mut ancillary = Ancillary::new(&doc, base, Config::default().with_debug(true))?;
    let serializer = HtmlSerializer::new();

    ancillary.sync(doc.tree_mut());
    println!("After first sync:\n{}\n", serializer.serialize_inner(doc.tree(), doc.body()));

    let body = doc.body();
    let tree = doc.tree_mut();
    tree.toggle_class(body, "ancillary-theme-cart-position-sidebar", Some(false))?;
    tree.toggle_class(body, "ancillary-theme-cart-position-header", Some(true))?;
    tree.toggle_class(body, "ancillary-theme-promo-position-sidebar", Some(true))?;

    ancillary.sync(doc.tree_mut());
    println!("After customizer change:\n{}", serializer.serialize_inner(doc.tree(), doc.body()));

    Ok(())
}
