//! Turns an uploaded curator list into the brand-intelligence prompt.

use chrono::{DateTime, TimeZone};
use thiserror::Error;

/// Columns whose non-empty values are listed after an entry's name.
const URL_COLUMNS: [&str; 5] = ["youtube", "instagram", "reddit", "twitter", "linkedin"];

const NONE_PROVIDED: &str = "None provided";

pub const SYSTEM_PROMPT: &str = "You are an expert LLM for rigorous, granular brand and \
reputation risk analysis, with competitive intelligence and deep sentiment tracking.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("curator list is empty")]
    Empty,

    #[error("curator list has no '{0}' column")]
    MissingColumn(&'static str),
}

/// The brand and the entries monitored for it, each rendered as
/// `name (url, url, ...)`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MonitoredSet {
    pub brand: String,
    pub influencers: Vec<String>,
    pub competitors: Vec<String>,
}

struct Header<'a> {
    columns: Vec<&'a str>,
}

impl<'a> Header<'a> {
    fn parse(line: &'a str) -> Self {
        Self {
            columns: line.split(',').map(str::trim).collect(),
        }
    }

    fn index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    fn require(&self, column: &'static str) -> Result<usize, PromptError> {
        self.index(column).ok_or(PromptError::MissingColumn(column))
    }
}

/// Parse a curator-list CSV.
///
/// Fields are split on commas without quoting. The brand is the first
/// non-empty brand cell; a header-only list leaves it empty. Rows whose type
/// is neither influencer nor competitor are skipped.
///
/// # Errors
///
/// Returns [`PromptError`] if the text is empty or lacks the `brand`, `type`
/// or `name` column.
pub fn parse_curator_csv(text: &str) -> Result<MonitoredSet, PromptError> {
    let mut lines = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());

    let header = Header::parse(lines.next().ok_or(PromptError::Empty)?);
    let brand_col = header.require("brand")?;
    let type_col = header.require("type")?;
    let name_col = header.require("name")?;
    let url_cols: Vec<usize> = URL_COLUMNS.iter().filter_map(|c| header.index(c)).collect();

    let mut set = MonitoredSet::default();
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("");

        if set.brand.is_empty() {
            set.brand = field(brand_col).trim().to_string();
        }

        let name = field(name_col);
        let urls: Vec<&str> = url_cols
            .iter()
            .map(|&i| field(i))
            .filter(|u| !u.is_empty())
            .collect();
        let entry = if urls.is_empty() {
            name.to_string()
        } else {
            format!("{name} ({})", urls.join(", "))
        };

        match field(type_col).trim().to_lowercase().as_str() {
            "influencer" => set.influencers.push(entry),
            "competitor" => set.competitors.push(entry),
            other => tracing::debug!(kind = other, "skipping row of unknown type"),
        }
    }

    Ok(set)
}

/// Render a timestamp the way the prompt states "as of".
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%A, %B %d, %Y, %I:%M %p").to_string()
}

fn block(entries: &[String]) -> String {
    if entries.is_empty() {
        NONE_PROVIDED.to_string()
    } else {
        format!("\n  - {}", entries.join("\n  - "))
    }
}

/// Build the user prompt for `set`, dated `as_of`.
/// An unknown brand is written as `None provided`.
pub fn build_prompt(set: &MonitoredSet, as_of: &str) -> String {
    let brand = if set.brand.is_empty() {
        NONE_PROVIDED
    } else {
        set.brand.as_str()
    };
    let competitors = block(&set.competitors);
    let influencers = block(&set.influencers);

    format!(
        r#"
You are an industry-leading executive intelligence analyst, specializing in deep competitor monitoring, public opinion mining, risk mapping, perception analysis, and market strategy for technology brands.

BRAND OF FOCUS: {brand}
As of {as_of}.

### Monitored Competitors:
{competitors}
### Monitored Influencers:
{influencers}

---

#### TASK INSTRUCTIONS (be exhaustive, nuanced, and critically evaluative):

1. **Priority Competitor & Influencer Expansion**
    - Surface and name the 10 most currently relevant, emergent, or high-risk competitors and influencers not already listed who have recently affected, threatened, or criticized {brand}. For every new entry: state the factor/trend/event that justifies their addition, and what segment of the public or what platforms have amplified their effect or risk.

2. **Negative Sentiment & Brand Critique Mapping (Deep Dive)**
    - For _each_ competitor and influencer (existing and new), identify and thoroughly dissect all major criticisms, negative viral topics, sarcastic social media posts, negative reviews, failed feature launches, negative comparisons, or public sentiment dips impacting {brand} in the last six months.
    - Provide direct quotes, paraphrased controversies, and explain precisely why consumers or press have chosen _not_ to select {brand} and instead favored a competitor (e.g., missing features, reliability, after-sales service, price, ecosystem lock-in, support cycles, incompatibility, community toxicity, privacy, innovation lag, anti-consumer moves, marketing missteps, etc.).
    - Where possible, cross-reference and cite which competitors or influencers originated or amplified each negative theme, and whether it appears to be a genuine concern, a competitor attack, an influencer's honest review, or an online rumor.
    - Specifically highlight _new_ or _escalating_ pain points, repeated customer complaints, trust failures, or technical loopholes that are causing churn or poor sentiment for {brand}.

3. **Why Consumers Choose Others: Switch-Out and Brand Erosion Analysis**
    - Analyze and summarize real, cited reasons (from reviews, forums, survey snapshots, or influencer posts) why people actively _switch away from_ {brand} or decline to choose it versus main competitors.
    - For at least three main rivals, detail their strengths (whether perceived or real) that are motivating customers to defect, such as better value, ecosystem integration, innovation cycles, feature maturity, critical marketing differentiation, or influencer advocacy.
    - If notable, highlight the _emotional motivators_ behind switching—whether stemming from peer trends, bad experiences, brand fatigue, or identity associations expressed online.

4. **Brand Vulnerability Matrix & Table**
    - Construct a matrix/table analyzing critical pain points, risks, and weaknesses unique to {brand} versus each primary competitor. Structure by row: pain point/risk, brand's status, comparison with each key competitor, short commentary (with supporting evidence).
    - Provide an executive summary beneath this table highlighting "red zones" (urgent, critical issues), "amber" (emerging risks), and "green" (areas where {brand} has recovered or improved recently).

5. **Detailed Brand vs. Competitor Specs, Positioning, and Marketing Table**
    - For each major competitor, compare product spec highlights, launch timelines, USP claims, influencer coverage frequency, pricing categories, ecosystem stickiness, innovation perception, customer loyalty, and major ongoing campaigns.

6. **Current Activities, Innovations, and Viral Moves**
    - For every top competitor/influencer, provide detailed outlines of their most important product releases, viral campaign launches, patent news, software updates, aggressive promotional pushes, and any moves that have directly or indirectly targeted {brand}'s customers.

7. **Integrated Public Sentiment & Narrative Analysis**
    - Compose a structured summary of _public image_ for {brand}. Split this into positive and negative sub-headings. For negative image, elaborate on:
        - The major recurring criticisms—citing precise influencer, reviewer, or community voices where possible
        - The role of user communities, tech press, or online rumors in amplifying problems
        - Qualitative sentiment trend analysis (trending negative or improving? overblown or genuine?)
        - Impactful incidents/events that shaped sentiment (scandals, product recalls, viral reviews.)

8. **Actionable Brand Recovery and Defense Recommendations**
    - Based on all above, recommend urgent comms, product, influencer, and support moves to address, mitigate, or reverse each major negative perception.
    - Suggest both outbound (new campaigns, partnerships) and inbound (customer experience, product roadmap, public apology if needed) responses, calibrated by the risk rating of each negative narrative mapped above.

---

**Format the output as an executive-level investigative report, with numbered headings, bullet-lists, tables, direct quoted evidence, sub-headings for negative themes, and bolded/flagged risk items. Maintain clear, fact-grounded, and actionable insight throughout. Clearly distinguish sourced negatives from general market buzz, and never “balance” for positivity if real market indicators or voices are negative or deteriorating.**
"#
    )
}
