use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::recruiter::Recruiter;
use rust_xlsxwriter::*;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct ExportService;

struct Palette {
    primary: Color,
    header_bg: Color,
    alt_row_1: Color,
    alt_row_2: Color,
    border: Color,
}

const PALETTE: Palette = Palette {
    primary: Color::RGB(0x1E293B),   // Slate 800
    header_bg: Color::RGB(0x0F172A), // Slate 900
    alt_row_1: Color::RGB(0xF8FAFC), // Slate 50
    alt_row_2: Color::White,
    border: Color::RGB(0xE2E8F0),    // Slate 200
};

fn status_color(status: CandidateStatus) -> Color {
    match status {
        CandidateStatus::Pending => Color::RGB(0x3B82F6),     // Blue
        CandidateStatus::Reviewed => Color::RGB(0xF59E0B),    // Amber
        CandidateStatus::Contacted => Color::RGB(0x8B5CF6),   // Violet
        CandidateStatus::Interviewed => Color::RGB(0x0EA5E9), // Sky
        CandidateStatus::Hired => Color::RGB(0x10B981),       // Emerald
        CandidateStatus::Rejected => Color::RGB(0xEF4444),    // Red
    }
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "—"
    } else {
        value
    }
}

impl ExportService {
    /// Title, subtitle and header rows shared by every sheet. Returns the first
    /// data row.
    fn write_banner(
        worksheet: &mut Worksheet,
        title: &str,
        subtitle: &str,
        columns: &[(&str, f64)],
    ) -> Result<u32> {
        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }
        let last_col = (columns.len() - 1) as u16;

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(PALETTE.primary)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(0, 40)?;
        worksheet.merge_range(0, 0, 0, last_col, title, &title_format)?;

        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0x94A3B8))
            .set_background_color(PALETTE.primary)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(1, 22)?;
        worksheet.merge_range(1, 0, 1, last_col, subtitle, &subtitle_format)?;

        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(PALETTE.header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap()
            .set_border(FormatBorder::Thin)
            .set_border_color(PALETTE.border);
        worksheet.set_row_height(2, 30)?;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(2, i as u16, *name, &header_format)?;
        }
        worksheet.set_freeze_panes(3, 0)?;

        Ok(3)
    }

    fn row_format(idx: usize) -> Format {
        let bg = if idx % 2 == 0 {
            PALETTE.alt_row_1
        } else {
            PALETTE.alt_row_2
        };
        Format::new()
            .set_font_size(10)
            .set_background_color(bg)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(PALETTE.border)
    }

    /// Candidates with their answers flattened into one cell, one line per
    /// question.
    pub fn generate_candidates_xlsx(candidates: &[Candidate]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Candidates")?;

        let columns = [
            ("No.", 8.0),
            ("Full name", 30.0),
            ("Email", 30.0),
            ("Phone", 18.0),
            ("Vacancy", 32.0),
            ("Zone", 18.0),
            ("Message", 40.0),
            ("Answers", 60.0),
            ("Status", 16.0),
            ("Submitted at", 20.0),
        ];
        let now = chrono::Utc::now().format("%d.%m.%Y %H:%M UTC").to_string();
        let subtitle = format!("Exported: {}  •  Total candidates: {}", now, candidates.len());
        let data_start_row =
            Self::write_banner(worksheet, "Candidates report", &subtitle, &columns)?;

        for (idx, candidate) in candidates.iter().enumerate() {
            let row = data_start_row + idx as u32;
            let base_fmt = Self::row_format(idx);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);
            let wrap_fmt = base_fmt.clone().set_text_wrap();
            let name_fmt = base_fmt.clone().set_bold();

            worksheet.set_row_height(row, 22)?;
            worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;
            worksheet.write_string_with_format(row, 1, &candidate.full_name, &name_fmt)?;
            worksheet.write_string_with_format(row, 2, &candidate.email, &base_fmt)?;
            worksheet.write_string_with_format(row, 3, &candidate.phone, &base_fmt)?;
            worksheet.write_string_with_format(row, 4, or_dash(&candidate.vacancy_title), &wrap_fmt)?;
            worksheet.write_string_with_format(row, 5, or_dash(&candidate.zona), &base_fmt)?;
            worksheet.write_string_with_format(row, 6, or_dash(&candidate.message), &wrap_fmt)?;

            let answers = candidate
                .answers
                .iter()
                .map(|a| format!("{}: {}", a.question_text, or_dash(&a.answer)))
                .collect::<Vec<_>>()
                .join("\n");
            worksheet.write_string_with_format(row, 7, or_dash(&answers), &wrap_fmt)?;

            let status_fmt = Format::new()
                .set_font_size(10)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(status_color(candidate.status))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(PALETTE.border);
            worksheet.write_string_with_format(row, 8, candidate.status.label(), &status_fmt)?;

            let submitted = candidate.created_at.format("%d.%m.%Y %H:%M").to_string();
            worksheet.write_string_with_format(row, 9, &submitted, &center_fmt)?;
        }

        // ── Summary row ──
        let total_row = data_start_row + candidates.len() as u32 + 1;
        let summary_fmt = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(PALETTE.primary)
            .set_background_color(Color::RGB(0xE0E7FF)) // Indigo 100
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(PALETTE.border);
        worksheet.set_row_height(total_row, 26)?;
        worksheet.merge_range(
            total_row,
            0,
            total_row,
            1,
            &format!("Total: {} candidates", candidates.len()),
            &summary_fmt,
        )?;

        let status_summary = CandidateStatus::ALL
            .iter()
            .map(|status| {
                let count = candidates.iter().filter(|c| c.status == *status).count();
                format!("{}: {}", status.label(), count)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        worksheet.merge_range(total_row, 2, total_row, 7, &status_summary, &summary_fmt)?;

        Ok(workbook.save_to_buffer()?)
    }

    pub fn generate_recruiters_xlsx(recruiters: &[Recruiter]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Recruiters")?;

        let columns = [
            ("No.", 8.0),
            ("Name", 30.0),
            ("Position", 26.0),
            ("Department", 24.0),
            ("Email", 30.0),
            ("Phone", 18.0),
            ("Extension", 12.0),
            ("WhatsApp", 18.0),
        ];
        let subtitle = format!("Total recruiters: {}", recruiters.len());
        let data_start_row =
            Self::write_banner(worksheet, "Recruiter directory", &subtitle, &columns)?;

        for (idx, recruiter) in recruiters.iter().enumerate() {
            let row = data_start_row + idx as u32;
            let base_fmt = Self::row_format(idx);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);

            worksheet.set_row_height(row, 22)?;
            worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;
            worksheet.write_string_with_format(row, 1, &recruiter.name, &base_fmt.clone().set_bold())?;

            let cells = [
                &recruiter.position,
                &recruiter.department,
                &recruiter.email,
                &recruiter.phone,
                &recruiter.extension,
                &recruiter.whatsapp,
            ];
            for (offset, value) in cells.into_iter().enumerate() {
                let text = value.as_deref().unwrap_or("—");
                worksheet.write_string_with_format(row, 2 + offset as u16, text, &base_fmt)?;
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}
