//! Catalog parsing.
//!
//! The catalog is a CSV file with a header row. Each data row becomes one
//! [`Product`] mapping the header names to that row's values. Nothing is
//! validated or coerced; duplicates and unknown columns are preserved, and row
//! order is the file's order.

use crate::models::Product;

/// Parse catalog CSV bytes into products.
///
/// The reader runs in flexible mode so ragged rows pass through: a short row
/// simply lacks its trailing fields, and values past the header width are
/// dropped for want of a field name.
pub fn parse(data: &[u8]) -> Result<Vec<Product>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);
    let headers = reader.headers()?.clone();

    let mut products = Vec::new();
    for record in reader.records() {
        let record = record?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        products.push(Product::new(fields));
    }

    Ok(products)
}
