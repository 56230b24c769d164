//! CSV job feeds: column aliasing, delimiter sniffing and posting construction.

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::IngestError;
use crate::models::JobPosting;
use crate::nlp::{Embedder, TextFeatureExtractor};

const DELIMITERS: &[u8] = b",;\t|";
const SNIFF_BYTES: usize = 1024;
const MAX_REPORTED_ERRORS: usize = 10;
const TITLE_ID_CHARS: usize = 20;
const COMPANY_ID_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobField {
    Title,
    Company,
    Location,
    Description,
    Requirements,
    SalaryMin,
    SalaryMax,
    JobType,
    ExperienceLevel,
    PostedDate,
}

impl JobField {
    const ALL: [JobField; 10] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::Description,
        JobField::Requirements,
        JobField::SalaryMin,
        JobField::SalaryMax,
        JobField::JobType,
        JobField::ExperienceLevel,
        JobField::PostedDate,
    ];

    /// Accepted header names, in priority order.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            JobField::Title => &["title", "job_title", "position", "role"],
            JobField::Company => &["company", "company_name", "employer"],
            JobField::Location => &["location", "city", "city_state", "place"],
            JobField::Description => &["description", "job_description", "details", "summary"],
            JobField::Requirements => &[
                "requirements",
                "qualifications",
                "skills_required",
                "must_have",
            ],
            JobField::SalaryMin => &["salary_min", "min_salary", "salary_low"],
            JobField::SalaryMax => &["salary_max", "max_salary", "salary_high"],
            JobField::JobType => &["job_type", "employment_type", "type"],
            JobField::ExperienceLevel => &["experience_level", "seniority", "level"],
            JobField::PostedDate => &["posted_date", "date_posted", "posted", "date"],
        }
    }
}

/// Header positions for every alias of every field.
struct ColumnMap {
    columns: Vec<(JobField, Vec<usize>)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let columns = JobField::ALL
            .iter()
            .map(|field| {
                let indices = field
                    .aliases()
                    .iter()
                    .filter_map(|alias| names.iter().position(|n| n == alias))
                    .collect();
                (*field, indices)
            })
            .collect();
        Self { columns }
    }

    /// First non-blank value among the field's aliases.
    fn value(&self, record: &StringRecord, field: JobField) -> Option<String> {
        let (_, indices) = self.columns.iter().find(|(f, _)| *f == field)?;
        indices
            .iter()
            .filter_map(|i| record.get(*i))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedReport {
    pub status: String,
    pub source_file: String,
    pub jobs_processed: usize,
    pub jobs_failed: usize,
    pub errors: Vec<String>,
}

#[derive(Debug)]
pub struct ParsedFeed {
    pub postings: Vec<JobPosting>,
    pub report: FeedReport,
}

/// Picks the candidate delimiter that occurs most often in the header line.
/// Ties go to the earlier candidate; no candidate at all means comma.
pub fn sniff_delimiter(data: &[u8]) -> u8 {
    let sample = &data[..data.len().min(SNIFF_BYTES)];
    let header = sample
        .split(|b| *b == b'\n')
        .next()
        .unwrap_or_default();

    let mut best = (b',', 0usize);
    for candidate in DELIMITERS {
        let count = header.iter().filter(|b| *b == candidate).count();
        if count > best.1 {
            best = (*candidate, count);
        }
    }
    best.0
}

/// `<company>_<title>_<timestamp>`, each part reduced to lowercase ASCII alphanumerics.
pub fn generate_job_id(title: &str, company: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}_{}",
        id_fragment(company, COMPANY_ID_CHARS),
        id_fragment(title, TITLE_ID_CHARS),
        now.format("%Y%m%d%H%M%S")
    )
}

fn id_fragment(value: &str, max_chars: usize) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(max_chars)
        .collect()
}

/// Lenient salary parsing: currency symbols, separators and blanks are ignored.
fn parse_salary(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a CSV feed into fully analysed postings plus a processing report.
///
/// Row-level problems are counted and reported; only an unreadable header fails the feed.
pub fn parse_job_feed(
    data: &[u8],
    source_file: &str,
    extractor: &TextFeatureExtractor,
    embedder: &dyn Embedder,
    now: DateTime<Utc>,
) -> Result<ParsedFeed, IngestError> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    let delimiter = sniff_delimiter(data);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::MissingHeader);
    }
    let columns = ColumnMap::from_headers(&headers);

    let mut postings = Vec::new();
    let mut errors = Vec::new();
    let mut failed = 0;

    for (index, result) in reader.records().enumerate() {
        let row_num = index + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                failed += 1;
                warn!("Error processing row {row_num}: {e}");
                errors.push(format!("Row {row_num}: {e}"));
                continue;
            }
        };

        match build_posting(&columns, &record, source_file, extractor, embedder, now) {
            Some(posting) => postings.push(posting),
            None => {
                failed += 1;
                errors.push(format!("Row {row_num}: Failed to parse job data"));
            }
        }
    }

    info!(
        "CSV processing completed: {} processed, {} failed",
        postings.len(),
        failed
    );

    errors.truncate(MAX_REPORTED_ERRORS);
    let report = FeedReport {
        status: "completed".to_string(),
        source_file: source_file.to_string(),
        jobs_processed: postings.len(),
        jobs_failed: failed,
        errors,
    };
    Ok(ParsedFeed { postings, report })
}

fn build_posting(
    columns: &ColumnMap,
    record: &StringRecord,
    source_file: &str,
    extractor: &TextFeatureExtractor,
    embedder: &dyn Embedder,
    now: DateTime<Utc>,
) -> Option<JobPosting> {
    let title = columns.value(record, JobField::Title)?;
    let company = columns.value(record, JobField::Company);
    let description = columns.value(record, JobField::Description);
    let requirements = columns.value(record, JobField::Requirements);

    let full_text = format!(
        "{} {}",
        description.as_deref().unwrap_or_default(),
        requirements.as_deref().unwrap_or_default()
    )
    .trim()
    .to_string();

    let embedding = embedder.embed(&full_text);

    Some(JobPosting {
        job_id: generate_job_id(&title, company.as_deref().unwrap_or_default(), now),
        title,
        company,
        location: columns.value(record, JobField::Location),
        description,
        requirements,
        skills: extractor.extract_skills(&full_text),
        keywords: extractor.extract_keywords(&full_text),
        embedding_dimension: embedding.dimension,
        embedding_model: embedding.model,
        embedding: embedding.embedding,
        salary_min: columns
            .value(record, JobField::SalaryMin)
            .and_then(|s| parse_salary(&s)),
        salary_max: columns
            .value(record, JobField::SalaryMax)
            .and_then(|s| parse_salary(&s)),
        job_type: columns.value(record, JobField::JobType),
        experience_level: columns.value(record, JobField::ExperienceLevel),
        posted_date: columns.value(record, JobField::PostedDate),
        source_file: source_file.to_string(),
        created_at: now,
        full_text,
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::nlp::PseudoEmbedder;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    fn parse(data: &str) -> ParsedFeed {
        parse_job_feed(
            data.as_bytes(),
            "jobs.csv",
            &TextFeatureExtractor::new(),
            &PseudoEmbedder::new(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter(b"title,company,location\n"), b',');
        assert_eq!(sniff_delimiter(b"title;company;location\na,b,c,d,e"), b';');
        assert_eq!(sniff_delimiter(b"title\tcompany\n"), b'\t');
        assert_eq!(sniff_delimiter(b"title|company|x\n"), b'|');
        assert_eq!(sniff_delimiter(b"title\n"), b',');
    }

    #[test]
    fn test_generate_job_id() {
        let id = generate_job_id("Senior Rust Engineer (Remote)", "Acme, Inc.", fixed_now());
        assert_eq!(id, "acmeinc_seniorrustengineerre_20240305140709");
    }

    #[test]
    fn test_job_id_truncates_parts() {
        let id = generate_job_id(
            "A very long title that keeps going",
            "Extremely Long Company Name",
            fixed_now(),
        );
        assert_eq!(id, "extremelylongco_averylongtitlethatke_20240305140709");
    }

    #[test]
    fn test_parses_rows_with_aliases() {
        let feed = parse(
            "job_title,employer,city,job_description,qualifications,min_salary,employment_type\n\
             Backend Engineer,Acme,Berlin,Build Python services,5+ years of Docker,\"$90,000\",Full-time\n",
        );
        assert_eq!(feed.report.jobs_processed, 1);
        assert_eq!(feed.report.jobs_failed, 0);
        assert_eq!(feed.report.status, "completed");

        let job = &feed.postings[0];
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company.as_deref(), Some("Acme"));
        assert_eq!(job.location.as_deref(), Some("Berlin"));
        assert_eq!(job.full_text, "Build Python services 5+ years of Docker");
        assert_eq!(job.salary_min, Some(90_000.0));
        assert_eq!(job.job_type.as_deref(), Some("Full-time"));
        assert_eq!(job.source_file, "jobs.csv");
        assert!(job.skills.contains(&"Python".to_string()));
        assert!(job.skills.contains(&"Docker".to_string()));
        assert_eq!(job.embedding.len(), job.embedding_dimension);
        assert!(!job.embedding.is_empty());
    }

    #[test]
    fn test_first_non_blank_alias_wins() {
        let feed = parse("title,position,description\n,Data Analyst,SQL reports\n");
        assert_eq!(feed.postings[0].title, "Data Analyst");
    }

    #[test]
    fn test_rows_without_title_fail() {
        let feed = parse("title,description\n,orphan\nQA Engineer,testing\n");
        assert_eq!(feed.report.jobs_processed, 1);
        assert_eq!(feed.report.jobs_failed, 1);
        assert_eq!(feed.report.errors, vec!["Row 1: Failed to parse job data"]);
    }

    #[test]
    fn test_semicolon_feed() {
        let feed = parse("title;company\nDevOps Engineer;Initech\n");
        assert_eq!(feed.postings[0].company.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_errors_are_capped() {
        let mut csv = String::from("title,description\n");
        for _ in 0..15 {
            csv.push_str(",nothing\n");
        }
        let feed = parse(&csv);
        assert_eq!(feed.report.jobs_failed, 15);
        assert_eq!(feed.report.errors.len(), MAX_REPORTED_ERRORS);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let result = parse_job_feed(
            b"",
            "empty.csv",
            &TextFeatureExtractor::new(),
            &PseudoEmbedder::new(),
            fixed_now(),
        );
        assert!(matches!(result, Err(IngestError::MissingHeader)));
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("$120,000"), Some(120_000.0));
        assert_eq!(parse_salary("95000.50"), Some(95_000.5));
        assert_eq!(parse_salary("competitive"), None);
    }
}
