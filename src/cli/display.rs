use std::path::Path;

use crate::model::{InventoryItem, Student};
use crate::report::format_line;

pub fn display_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No inventory items found");
        return;
    }

    println!("ID | Name | Quantity | Date Added");
    println!("--------- | --------- | --------- | ---------");
    for item in items {
        println!(
            "{} | {} | {} | {}",
            item.id,
            item.name,
            item.quantity,
            item.date_added.format("%Y-%m-%d %H:%M")
        );
    }
}

pub fn display_report(students: &[Student], output: &Path) {
    for student in students {
        println!("{}", format_line(student));
    }
    println!("Report for {} student(s) written to {}", students.len(), output.display());
}
