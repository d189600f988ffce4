use crate::model::{AnalysisResult, Table};
use crate::stats::{TrendDirection, numeric_summary, trend_direction};

/// Seam for answer generation. The shipped implementation builds templated
/// text from local statistics; a real analytics backend can be substituted
/// here without touching the parser or classifier contracts.
pub trait InsightFormatter {
    fn answer(&self, question: &str, table: &Table, analysis: &AnalysisResult) -> String;
}

/// Keyword-routed templated answers backed by the sampled statistics in
/// [`crate::stats`]. Deterministic: the same question over the same analysis
/// always yields the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFormatter;

impl TemplateFormatter {
    fn trend_answer(table: &Table, analysis: &AnalysisResult) -> String {
        let lead_columns = analysis
            .numeric_columns
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" and ");

        let observation = analysis
            .numeric_columns
            .first()
            .and_then(|column| {
                trend_direction(table, column).map(|direction| {
                    let phrase = match direction {
                        TrendDirection::Upward => "an upward trend",
                        TrendDirection::Stabilizing => "a stabilizing pattern",
                    };
                    format!("I observe {phrase} in your {column} data.")
                })
            })
            .unwrap_or_else(|| {
                "The temporal patterns show consistent activity across the dataset.".to_string()
            });

        if lead_columns.is_empty() {
            format!(
                "Across the {} records in your {} dataset: {observation}",
                analysis.row_count, analysis.domain
            )
        } else {
            format!(
                "Across the {} records in your {} dataset: {observation} The key columns for trend analysis are {lead_columns}.",
                analysis.row_count, analysis.domain
            )
        }
    }

    fn financial_answer(table: &Table, analysis: &AnalysisResult) -> String {
        let financial_column = analysis
            .numeric_columns
            .iter()
            .find(|column| {
                let lower = column.to_lowercase();
                ["revenue", "sales", "price", "amount"]
                    .iter()
                    .any(|hint| lower.contains(hint))
            })
            .or_else(|| analysis.numeric_columns.first());

        match financial_column.and_then(|column| {
            numeric_summary(table, column).map(|summary| (column, summary))
        }) {
            Some((column, summary)) => format!(
                "Financially, your {} data shows an average {column} of {:.2}, ranging from {} to {}, over {} sampled values.",
                analysis.domain, summary.mean, summary.min, summary.max, summary.count
            ),
            None => format!(
                "Your {} data carries no numeric measures; the categorical columns are the strongest basis for segmentation analysis.",
                analysis.domain
            ),
        }
    }

    fn customer_answer(analysis: &AnalysisResult) -> String {
        let customer_column = analysis
            .columns
            .iter()
            .find(|column| {
                let lower = column.to_lowercase();
                ["customer", "user", "client"]
                    .iter()
                    .any(|hint| lower.contains(hint))
            })
            .or_else(|| analysis.columns.first());

        match customer_column {
            Some(column) => format!(
                "Looking at your {} dataset of {} records, {column} is the natural key for segmenting behavior patterns.",
                analysis.domain, analysis.row_count
            ),
            None => "The dataset has no columns to segment customers by.".to_string(),
        }
    }

    fn top_performers_answer(table: &Table, analysis: &AnalysisResult) -> String {
        match analysis
            .numeric_columns
            .first()
            .and_then(|column| numeric_summary(table, column).map(|summary| (column, summary)))
        {
            Some((column, summary)) => format!(
                "Top performers in {column} reach {}, against a mean of {:.2} across {} records.",
                summary.max, summary.mean, analysis.row_count
            ),
            None => {
                "With no numeric measures, the most frequent categorical segments stand in for top performers.".to_string()
            }
        }
    }

    fn average_answer(table: &Table, analysis: &AnalysisResult) -> String {
        match analysis
            .numeric_columns
            .first()
            .and_then(|column| numeric_summary(table, column).map(|summary| (column, summary)))
        {
            Some((column, summary)) => format!(
                "Statistical summary of {column}: mean {:.2}, min {}, max {}, over {} sampled values. The dataset holds {} numeric columns in total.",
                summary.mean,
                summary.min,
                summary.max,
                summary.count,
                analysis.numeric_columns.len()
            ),
            None => "No numeric columns were detected, so there is nothing to average.".to_string(),
        }
    }

    fn recommendation_answer(analysis: &AnalysisResult) -> String {
        use crate::domain::DomainLabel;

        let advice = match analysis.domain {
            DomainLabel::Restaurant => {
                "optimize menu performance, analyze peak hours, and invest in customer retention"
            }
            DomainLabel::Ecommerce => {
                "optimize product performance, review acquisition costs, and improve the conversion funnel"
            }
            DomainLabel::Saas => {
                "analyze user engagement, watch for churn signals, and track feature adoption"
            }
            DomainLabel::Finance | DomainLabel::General => {
                "benchmark performance, analyze trends, and segment customers"
            }
        };
        format!(
            "Based on your {} data ({} records), I recommend you {advice}.",
            analysis.domain, analysis.row_count
        )
    }

    fn default_answer(analysis: &AnalysisResult) -> String {
        format!(
            "I've analyzed your {} dataset with {} records: {} quantitative measures and {} categorical dimensions. What would you like to investigate?",
            analysis.domain,
            analysis.row_count,
            analysis.numeric_columns.len(),
            analysis.column_count - analysis.numeric_columns.len()
        )
    }
}

impl InsightFormatter for TemplateFormatter {
    fn answer(&self, question: &str, table: &Table, analysis: &AnalysisResult) -> String {
        let question = question.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| question.contains(keyword));

        if mentions(&["trend", "pattern"]) {
            Self::trend_answer(table, analysis)
        } else if mentions(&["revenue", "sales", "money", "financial"]) {
            Self::financial_answer(table, analysis)
        } else if mentions(&["customer", "user", "client"]) {
            Self::customer_answer(analysis)
        } else if mentions(&["top", "best", "highest"]) {
            Self::top_performers_answer(table, analysis)
        } else if mentions(&["average", "mean", "median"]) {
            Self::average_answer(table, analysis)
        } else if mentions(&["recommend", "suggest", "advice"]) {
            Self::recommendation_answer(analysis)
        } else {
            Self::default_answer(analysis)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InsightFormatter, TemplateFormatter};
    use crate::AnalyzeOptions;

    fn analyzed(text: &str) -> crate::Analysis {
        crate::analyze_text(text, &AnalyzeOptions::default())
    }

    #[test]
    fn average_question_uses_real_statistics() {
        let analysis = analyzed("item,price\na,10\nb,20\nc,30");
        let answer = TemplateFormatter.answer(
            "what is the average price?",
            &analysis.table,
            &analysis.result,
        );
        assert!(answer.contains("mean 20.00"), "answer: {answer}");
        assert!(answer.contains("price"), "answer: {answer}");
    }

    #[test]
    fn recommendation_is_domain_specific() {
        let analysis = analyzed("menu_item,price\nburger,9");
        let answer =
            TemplateFormatter.answer("any advice?", &analysis.table, &analysis.result);
        assert!(answer.contains("menu performance"), "answer: {answer}");
    }

    #[test]
    fn unrouted_question_gets_the_overview_answer() {
        let analysis = analyzed("a,b\n1,2");
        let answer = TemplateFormatter.answer("hello", &analysis.table, &analysis.result);
        assert!(answer.contains("1 records"), "answer: {answer}");
    }

    #[test]
    fn answers_are_deterministic() {
        let analysis = analyzed("user,plan\nu1,pro\nu2,free");
        let first =
            TemplateFormatter.answer("show trends", &analysis.table, &analysis.result);
        let second =
            TemplateFormatter.answer("show trends", &analysis.table, &analysis.result);
        assert_eq!(first, second);
    }
}
