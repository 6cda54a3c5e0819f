//! Rendering of command output as JSON or a localised text summary.

use std::io::Write;

use clap::ValueEnum;
use compass_core::{Category, Locale, QuizResult};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Output formats supported by `compass score`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// The `QuizResult` contract as pretty JSON.
    #[default]
    Json,
    /// A short human-readable summary.
    Text,
}

/// Category names as `(ja, en)`, indexed by category number minus one.
const CATEGORY_NAMES: [(&str, &str); Category::COUNT] = [
    ("貧困をなくそう", "No Poverty"),
    ("飢餓をゼロに", "Zero Hunger"),
    ("すべての人に健康と福祉を", "Good Health and Well-being"),
    ("質の高い教育をみんなに", "Quality Education"),
    ("ジェンダー平等を実現しよう", "Gender Equality"),
    ("安全な水とトイレを世界中に", "Clean Water and Sanitation"),
    ("エネルギーをみんなに そしてクリーンに", "Affordable and Clean Energy"),
    ("働きがいも経済成長も", "Decent Work and Economic Growth"),
    ("産業と技術革新の基盤をつくろう", "Industry, Innovation and Infrastructure"),
    ("人や国の不平等をなくそう", "Reduced Inequalities"),
    ("住み続けられるまちづくりを", "Sustainable Cities and Communities"),
    ("つくる責任 つかう責任", "Responsible Consumption and Production"),
    ("気候変動に具体的な対策を", "Climate Action"),
    ("海の豊かさを守ろう", "Life Below Water"),
    ("陸の豊かさも守ろう", "Life on Land"),
    ("平和と公正をすべての人に", "Peace, Justice and Strong Institutions"),
    ("パートナーシップで目標を達成しよう", "Partnerships for the Goals"),
];

struct Labels {
    overall: &'static str,
    top: &'static str,
    bottom: &'static str,
    recommendations: &'static str,
    none: &'static str,
}

const JA_LABELS: Labels = Labels {
    overall: "総合関心度",
    top: "最も関心の高いSDGs",
    bottom: "関心の低いSDGs",
    recommendations: "おすすめアクション",
    none: "なし",
};

const EN_LABELS: Labels = Labels {
    overall: "Overall Interest",
    top: "Most Interested SDGs",
    bottom: "Least Interested SDGs",
    recommendations: "Recommended Actions",
    none: "none",
};

const fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::Ja => &JA_LABELS,
        Locale::En => &EN_LABELS,
    }
}

/// Japanese and English display names of `category`.
fn category_name(category: Category) -> (&'static str, &'static str) {
    usize::from(category.get())
        .checked_sub(1)
        .and_then(|index| CATEGORY_NAMES.get(index))
        .copied()
        .unwrap_or(("", ""))
}

fn localized_name(category: Category, locale: Locale) -> &'static str {
    let (ja, en) = category_name(category);
    match locale {
        Locale::Ja => ja,
        Locale::En => en,
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

/// Write `result` in the requested format.
pub(crate) fn write_result(
    writer: &mut dyn Write,
    result: &QuizResult,
    format: OutputFormat,
    locale: Locale,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, result),
        OutputFormat::Text => write_text(writer, result, locale).map_err(CliError::WriteOutput),
    }
}

fn write_text(writer: &mut dyn Write, result: &QuizResult, locale: Locale) -> std::io::Result<()> {
    let text = labels(locale);
    writeln!(writer, "{}: {}%", text.overall, result.overall_interest())?;
    write_ranking(writer, text.top, result.top3(), result, locale)?;
    write_ranking(writer, text.bottom, result.bottom3(), result, locale)?;

    writeln!(writer, "{}:", text.recommendations)?;
    if result.recommendations().is_empty() {
        writeln!(writer, "  {}", text.none)?;
    }
    for item in result.recommendations() {
        writeln!(
            writer,
            "  - {} [{}, {}]",
            item.title.get(locale),
            item.difficulty,
            item.estimated_time
        )?;
    }
    Ok(())
}

fn write_ranking(
    writer: &mut dyn Write,
    heading: &str,
    categories: &[Category],
    result: &QuizResult,
    locale: Locale,
) -> std::io::Result<()> {
    writeln!(writer, "{heading}:")?;
    if categories.is_empty() {
        writeln!(writer, "  {}", labels(locale).none)?;
    }
    for (position, &category) in (1_usize..).zip(categories) {
        writeln!(
            writer,
            "  {position}. [{}] {} ({}%)",
            category.get(),
            localized_name(category, locale),
            result.category_scores_norm().get(category)
        )?;
    }
    Ok(())
}
