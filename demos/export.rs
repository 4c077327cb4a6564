//! Export Example
//!
//! Builds a two-sheet workbook and saves it next to the current directory.
//!
//! Run with:
//! ```bash
//! cargo run --example export
//! ```

use excelxml::{CellValue, HttpDownload, Workbook};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut workbook = Workbook::builder().encoding("UTF-8").build();

    workbook
        .add_worksheet("Sales/Report?")
        .add_row(["Month", "Revenue", "Profit"])
        .add_row(vec![
            CellValue::from("January"),
            CellValue::Int(50000),
            CellValue::Float(12000.5),
        ])
        .add_row(vec![
            CellValue::from("February"),
            CellValue::Int(55000),
            CellValue::Float(15000.25),
        ]);

    workbook.add_array(
        "Notes",
        vec![vec!["R&D costs are <estimated>"], vec!["Figures in USD"]],
    );

    let document = workbook.finish();
    let path = document.save_to_dir(".", "Sales Report (Q1)")?;
    println!("Saved {} ({} bytes)", path.display(), document.to_bytes().len());

    let download = HttpDownload::new(document, "Sales Report (Q1)");
    for (name, value) in download.headers() {
        println!("{}: {}", name, value);
    }

    Ok(())
}
