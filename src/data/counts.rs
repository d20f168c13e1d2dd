use super::model::CellValue;

/// Frequency of each distinct label, ordered by descending count with ties
/// kept in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelCounts {
    entries: Vec<(String, usize)>,
}

/// One wedge of the pie chart, angles in degrees counter-clockwise from the
/// positive x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub percent: f64,
}

/// The first wedge starts at twelve o'clock.
pub const PIE_START_DEG: f64 = 90.0;

impl LabelCounts {
    /// Count the values of a label column. Null cells are skipped.
    pub fn from_column<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for value in values {
            if *value == CellValue::Null {
                continue;
            }
            let label = value.to_string();
            match entries.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => *count += 1,
                None => entries.push((label, 1)),
            }
        }
        // Stable sort keeps first-seen order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Pie wedges for the distribution, walking counter-clockwise from
    /// [`PIE_START_DEG`].
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = PIE_START_DEG;
        self.entries
            .iter()
            .map(|(label, count)| {
                let fraction = *count as f64 / total as f64;
                let slice = PieSlice {
                    label: label.clone(),
                    start_deg: start,
                    sweep_deg: fraction * 360.0,
                    percent: fraction * 100.0,
                };
                start += slice.sweep_deg;
                slice
            })
            .collect()
    }
}

/// Percentage annotation with one decimal place, e.g. `66.7%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}
