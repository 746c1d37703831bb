//! Quran page screen
//!
//! Lines are browsed one page at a time. The screen tracks the current page,
//! the go-to-page input, and the last stored line so the admin can jump
//! straight to where data entry stopped.

use super::table::{DeleteOutcome, TableView};
use crate::api::ApiResponse;
use crate::models::QuranLine;
use crate::services::QuranService;
use chrono::{DateTime, Utc};

const CSV_HEADERS: [&str; 5] = ["Page", "Line", "Arabic Text", "Created At", "Updated At"];

#[derive(Debug, Clone)]
pub struct QuranPager {
    page_number: i64,
    page_input: String,
    last_line: Option<QuranLine>,
    table: TableView<QuranLine>,
}

impl Default for QuranPager {
    fn default() -> Self {
        Self {
            page_number: 1,
            page_input: "1".to_string(),
            last_line: None,
            table: TableView::new(),
        }
    }
}

impl QuranPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn last_line(&self) -> Option<&QuranLine> {
        self.last_line.as_ref()
    }

    pub fn table(&self) -> &TableView<QuranLine> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableView<QuranLine> {
        &mut self.table
    }

    pub fn set_page_input(&mut self, input: impl Into<String>) {
        self.page_input = input.into();
    }

    /// Apply the go-to-page input. Only positive whole numbers move the page.
    pub fn go_to_input_page(&mut self) -> bool {
        match self.page_input.trim().parse::<i64>() {
            Ok(page) if page > 0 => {
                self.page_number = page;
                true
            }
            _ => false,
        }
    }

    pub fn next_page(&mut self) {
        self.page_number = self.page_number.saturating_add(1);
        self.page_input = self.page_number.to_string();
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page_number <= 1 {
            return false;
        }
        self.page_number -= 1;
        self.page_input = self.page_number.to_string();
        true
    }

    /// Jump to the page holding the last stored line, if known
    pub fn go_to_last_line_page(&mut self) -> bool {
        match &self.last_line {
            Some(line) if line.page_number > 0 => {
                self.page_number = line.page_number;
                self.page_input = line.page_number.to_string();
                true
            }
            _ => false,
        }
    }

    /// Fetch the current page
    pub async fn load(&mut self, service: &QuranService) {
        let response = service.get_page(self.page_number).await;
        self.table = TableView::from_response(response);
    }

    /// Refresh the last stored line. A failure keeps the previous value.
    pub async fn load_last_line(&mut self, service: &QuranService) {
        match service.last_line().await {
            ApiResponse::Success { data, .. } => self.last_line = Some(data),
            ApiResponse::Failure { message } => {
                tracing::warn!("Could not fetch last Quran line: {}", message)
            }
        }
    }

    pub async fn delete_line(
        &mut self,
        service: &QuranService,
        line: &QuranLine,
        confirmed: bool,
    ) -> DeleteOutcome {
        let (page, number) = line.key();
        self.table
            .delete(&format!("{}:{}", page, number), confirmed, |_| {
                service.delete(page, number)
            })
            .await
    }

    pub fn csv_file_name(&self) -> String {
        format!("quran_page_{}.csv", self.page_number)
    }

    /// CSV of the lines currently visible (search applied)
    pub fn export_csv(&self) -> String {
        lines_to_csv(self.table.visible_rows())
    }
}

fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn csv_time(value: Option<DateTime<Utc>>) -> String {
    value.map(|t| t.to_rfc3339()).unwrap_or_default()
}

pub fn lines_to_csv<'a>(lines: impl IntoIterator<Item = &'a QuranLine>) -> String {
    let mut rows = vec![CSV_HEADERS
        .iter()
        .map(|h| csv_cell(h))
        .collect::<Vec<_>>()
        .join(",")];

    for line in lines {
        let cells = [
            line.page_number.to_string(),
            line.line_number.to_string(),
            line.text_ar.clone(),
            csv_time(line.created_at),
            csv_time(line.updated_at),
        ];
        rows.push(
            cells
                .iter()
                .map(|c| csv_cell(c))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    rows.join("\n")
}
