use super::domain::{AnswerValue, Question, QuestionOption};

/// Ordered question bank presented to respondents.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct category names in first-seen order.
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !names.contains(&question.category.as_str()) {
                names.push(&question.category);
            }
        }
        names
    }
}

fn question(
    id: &str,
    category: &str,
    prompt: &str,
    description: &str,
    labels: [&str; 5],
) -> Question {
    let options = AnswerValue::ordered()
        .into_iter()
        .zip(labels)
        .map(|(value, label)| QuestionOption {
            value,
            label: label.to_string(),
        })
        .collect();

    Question {
        id: id.to_string(),
        category: category.to_string(),
        question: prompt.to_string(),
        description: description.to_string(),
        options,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            "strategy",
            "Strategic Focus",
            "How mature is your marketing strategy?",
            "Evaluate your strategic planning, goal-setting, and market positioning.",
            [
                "No formal strategy - reactive marketing",
                "Basic strategy - annual planning with limited data",
                "Defined strategy - quarterly planning with metrics",
                "Advanced strategy - integrated with business goals and competitive analysis",
                "World-class - data-driven, predictive, agile strategic planning",
            ],
        ),
        question(
            "content",
            "Content & Brand",
            "How sophisticated is your content operation?",
            "Assess your content creation, distribution, and measurement capabilities.",
            [
                "Ad-hoc content - no process or calendar",
                "Basic content - simple blog posts and social updates",
                "Structured content - editorial calendar and content types",
                "Advanced content - multi-channel, personalized, performance-tracked",
                "Content excellence - AI-assisted, omnichannel, audience-segmented",
            ],
        ),
        question(
            "demand_gen",
            "Demand Generation",
            "How effective is your demand generation?",
            "Evaluate lead generation, nurturing, and conversion capabilities.",
            [
                "No formal demand gen - sporadic campaigns",
                "Basic campaigns - email blasts and webinars",
                "Multi-channel campaigns - integrated email, ads, content",
                "Advanced demand gen - ABM, lead scoring, nurture tracks",
                "Predictive demand gen - AI-driven targeting and personalization",
            ],
        ),
        question(
            "customer_understanding",
            "Customer Understanding",
            "How well do you understand your customers?",
            "Measure customer research, data, and insights capabilities.",
            [
                "No formal customer research - assumptions only",
                "Basic surveys and feedback - limited insights",
                "Regular research - documented personas and journey maps",
                "Sophisticated insights - predictive analytics and segmentation",
                "Market-leading insights - AI-driven customer intelligence",
            ],
        ),
        question(
            "sales_alignment",
            "Customer Understanding",
            "How aligned are sales and marketing?",
            "Measure collaboration, shared goals, and handoff processes.",
            [
                "Misaligned - separate goals and limited communication",
                "Basic alignment - occasional meetings",
                "Defined SLAs - shared definitions and regular sync",
                "Strong alignment - integrated systems and joint planning",
                "Revenue team - unified goals, processes, and accountability",
            ],
        ),
        question(
            "tech_stack",
            "Technology Stack",
            "How sophisticated is your marketing technology?",
            "Evaluate your martech integration and utilization.",
            [
                "Minimal tools - email and basic CRM",
                "Basic stack - MAP, CRM, analytics",
                "Integrated stack - 5-10 tools with some integration",
                "Advanced stack - unified platform with data flows",
                "Best-in-class - fully integrated, AI-enabled martech ecosystem",
            ],
        ),
        question(
            "brand",
            "Content & Brand",
            "How consistent is your brand across channels?",
            "Assess brand positioning, messaging, and visual consistency.",
            [
                "Inconsistent - no brand guidelines",
                "Basic branding - some guidelines, inconsistent application",
                "Defined brand - guidelines exist, mostly followed",
                "Strong brand - cohesive messaging, consistent execution",
                "Market-leading brand - recognized, trusted, differentiated",
            ],
        ),
        question(
            "team_capability",
            "Team Capability",
            "How capable is your marketing team?",
            "Assess skills, experience, training, and resource allocation.",
            [
                "Under-resourced - lacks key skills and experience",
                "Basic team - some skills, limited depth",
                "Competent team - clear roles, some specialization",
                "Strong team - experienced, specialized, continuous learning",
                "Market-leading team - top talent, innovation, leadership",
            ],
        ),
        question(
            "operations",
            "Demand Generation",
            "How mature are your marketing operations?",
            "Assess process management, automation, and operational efficiency.",
            [
                "No formal operations - manual processes",
                "Basic automation - email sequences",
                "Defined operations - process documentation and workflows",
                "Advanced ops - integrated automation and data governance",
                "World-class ops - AI-driven optimization and predictive workflows",
            ],
        ),
        question(
            "measurement",
            "Strategic Focus",
            "How sophisticated is your marketing measurement?",
            "Evaluate analytics, attribution, and ROI measurement capabilities.",
            [
                "No analytics - flying blind",
                "Basic metrics - pageviews, clicks, email opens",
                "Standard analytics - conversions, revenue attribution",
                "Advanced analytics - multi-touch attribution, predictive modeling",
                "Market-leading - AI-powered insights, real-time optimization",
            ],
        ),
    ]
}
