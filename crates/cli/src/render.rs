//! Table and JSON rendering of store results.

use std::io::{self, Write};

use serde::Serialize;

use stockroom_core::Event;
use stockroom_inventory::{InventoryEvent, Product};

pub const EMPTY_STORE: &str = "No products found. Add some products to get started!";
pub const NO_MATCHES: &str = "No products match your search.";

pub fn json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Print a product list; `term` selects the empty-state wording.
pub fn product_table(out: &mut impl Write, products: &[Product], term: Option<&str>) -> io::Result<()> {
    if products.is_empty() {
        let hint = match term {
            Some(t) if !t.is_empty() => NO_MATCHES,
            _ => EMPTY_STORE,
        };
        return writeln!(out, "{hint}");
    }

    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let code_width = products
        .iter()
        .map(|p| p.code.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max("CODE".len());

    writeln!(
        out,
        "{:<15} {:<code_width$} {:<name_width$} {:>9} {:>9}",
        "ID", "CODE", "NAME", "WAREHOUSE", "SHOP"
    )?;
    for p in products {
        product_row(out, p, code_width, name_width)?;
    }
    Ok(())
}

/// Event message followed by the product's current row.
pub fn mutation(out: &mut impl Write, event: &InventoryEvent, product: &Product) -> io::Result<()> {
    writeln!(out, "{}", event.message())?;
    product_table(out, std::slice::from_ref(product), None)
}

fn product_row(out: &mut impl Write, p: &Product, code_width: usize, name_width: usize) -> io::Result<()> {
    writeln!(
        out,
        "{:<15} {:<code_width$} {:<name_width$} {:>9} {:>9}",
        p.id.to_string(),
        p.code.as_str(),
        p.name,
        p.warehouse,
        p.shop
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ProductId;
    use stockroom_inventory::ProductCode;

    fn render(products: &[Product], term: Option<&str>) -> String {
        let mut buf = Vec::new();
        product_table(&mut buf, products, term).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_states_depend_on_search_term() {
        assert_eq!(render(&[], None).trim(), EMPTY_STORE);
        assert_eq!(render(&[], Some("")).trim(), EMPTY_STORE);
        assert_eq!(render(&[], Some("zzz")).trim(), NO_MATCHES);
    }

    #[test]
    fn table_lists_each_product() {
        let products = vec![Product {
            id: ProductId::from_raw(1_700_000_000_000),
            name: "Bolt".into(),
            code: ProductCode::new("BOL-4821"),
            warehouse: 50,
            shop: 10,
        }];
        let text = render(&products, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("1700000000000"));
        assert!(lines[1].contains("BOL-4821"));
        assert!(lines[1].trim_end().ends_with("50        10"));
    }
}
