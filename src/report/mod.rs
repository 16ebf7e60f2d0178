// Summary of a reduction run - for the terminal and, on request, as JSON.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReductionReport {
    pub total_selected: usize,
    pub output_bytes: u64,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub selected: usize,
}

impl ReductionReport {
    /// Categories with zero selections are left out; the rest sort by
    /// count descending, label ascending as tiebreak so output is stable.
    pub fn new(counts: &HashMap<String, usize>, total: usize, output_bytes: u64) -> Self {
        let mut categories: Vec<CategoryCount> = counts
            .iter()
            .filter(|(_, &selected)| selected > 0)
            .map(|(label, &selected)| CategoryCount {
                label: label.clone(),
                selected,
            })
            .collect();
        categories.sort_by(|a, b| {
            b.selected
                .cmp(&a.selected)
                .then_with(|| a.label.cmp(&b.label))
        });

        Self {
            total_selected: total,
            output_bytes,
            categories,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Reduced playlist written ===\n");
        out.push_str(&format!("Total channels: {}\n", self.total_selected));
        out.push_str("\nBy category:\n");
        for cat in &self.categories {
            out.push_str(&format!("  {}: {}\n", cat.label, cat.selected));
        }
        out.push_str(&format!(
            "\nFile size: {:.2} KB\n",
            self.output_bytes as f64 / 1024.0
        ));
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
