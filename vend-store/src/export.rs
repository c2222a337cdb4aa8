use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use vend_catalog::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Dump the catalog to a flat file, one `id,name,price,stock` row per
/// product, ascending by id. No header, no escaping of commas in names.
/// Returns the number of rows written.
pub fn write_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);

    let products = catalog.list();
    for product in &products {
        writeln!(
            out,
            "{},{},{:.2},{}",
            product.id(),
            product.name(),
            product.price(),
            product.stock()
        )?;
    }
    out.flush()?;

    tracing::info!(path = %path.display(), rows = products.len(), "catalog exported");
    Ok(products.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use vend_catalog::Product;

    #[test]
    fn test_export_rows_sorted_by_id() {
        let mut catalog = Catalog::new();
        catalog.add(Product::new(2, "Keyboard", Decimal::new(25, 0), 5));
        catalog.add(Product::new(1, "Mouse", Decimal::new(15, 0), 10));

        let path = std::env::temp_dir().join("vend_export_test.csv");
        let rows = write_catalog(&catalog, &path).unwrap();
        assert_eq!(rows, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1,Mouse,15.00,10\n2,Keyboard,25.00,5\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_export_empty_catalog() {
        let catalog = Catalog::new();
        let path = std::env::temp_dir().join("vend_export_empty.csv");
        assert_eq!(write_catalog(&catalog, &path).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
        std::fs::remove_file(&path).unwrap();
    }
}
