//! Example of reading a HAL document, following links and re-rendering it.
//!
//! cargo run --package hal --example order_listing

use hal::{Link, Representation};

fn main() -> Result<(), serde_json::Error> {
    let tree: serde_json::Value = serde_json::from_str(
        r#"{
            "_links": {
                "curies": [{"name": "ea", "href": "http://example.com/docs/rels/{rel}"}],
                "self": {"href": "/orders"},
                "ea:admin": [{"href": "/admins/2", "title": "Fred"}, {"href": "/admins/5", "title": "Kate"}]
            },
            "currentlyProcessing": 14,
            "_embedded": {
                "ea:order": [
                    {"_links": {"self": {"href": "/orders/123"}}, "total": 30.0, "status": "shipped"},
                    {"_links": {"self": {"href": "/orders/124"}}, "total": 20.0, "status": "processing"}
                ]
            }
        }"#,
    )?;

    let mut orders = hal::parse(&tree);

    // Relations can be looked up by their expanded reference.
    for admin in orders.links_for("http://example.com/docs/rels/admin") {
        println!("admin {} at {}", admin.title().unwrap_or("?"), admin.href());
    }

    for order in orders.representations() {
        let href = order.link().map_or("?", Link::href);
        println!("{href}: {}", order.value_for("status", &serde_json::Value::Null));
    }

    let mut order = Representation::new();
    order
        .with_link(Link::new(Link::SELF_REL, "/orders/125"))
        .with_property("total", 12.5)
        .with_property("status", "new");
    orders.with_representation("ea:order", order);

    println!("{}", serde_json::to_string_pretty(&orders)?);
    Ok(())
}
