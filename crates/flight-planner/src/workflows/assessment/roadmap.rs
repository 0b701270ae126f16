use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadmapStage {
    Takeoff,
    Climb,
    Cruise,
}

impl RoadmapStage {
    pub const fn ordered() -> [Self; 3] {
        [Self::Takeoff, Self::Climb, Self::Cruise]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Takeoff => "Takeoff Phase",
            Self::Climb => "Climb Phase",
            Self::Cruise => "Cruise Phase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub focus: String,
    pub initiatives: Vec<String>,
}

impl RoadmapPhase {
    fn new(stage: RoadmapStage, duration: &str, focus: &str, initiatives: [&str; 4]) -> Self {
        Self {
            phase: stage.label().to_string(),
            duration: duration.to_string(),
            focus: focus.to_string(),
            initiatives: initiatives.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// Three-phase action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub takeoff: RoadmapPhase,
    pub climb: RoadmapPhase,
    pub cruise: RoadmapPhase,
}

impl Roadmap {
    pub fn standard() -> Self {
        Self {
            takeoff: RoadmapPhase::new(
                RoadmapStage::Takeoff,
                "Months 1-3",
                "Foundation building",
                [
                    "Establish clear marketing strategy and goals",
                    "Map current technology stack and gaps",
                    "Create marketing playbooks and processes",
                    "Define success metrics and reporting",
                ],
            ),
            climb: RoadmapPhase::new(
                RoadmapStage::Climb,
                "Months 4-12",
                "Acceleration",
                [
                    "Implement technology integrations",
                    "Launch demand generation campaigns",
                    "Build content engine",
                    "Align sales and marketing teams",
                ],
            ),
            cruise: RoadmapPhase::new(
                RoadmapStage::Cruise,
                "Months 13-24",
                "Optimization & Excellence",
                [
                    "Optimize marketing operations",
                    "Implement predictive analytics",
                    "Scale proven campaigns",
                    "Build market-leading capabilities",
                ],
            ),
        }
    }

    pub fn phase(&self, stage: RoadmapStage) -> &RoadmapPhase {
        match stage {
            RoadmapStage::Takeoff => &self.takeoff,
            RoadmapStage::Climb => &self.climb,
            RoadmapStage::Cruise => &self.cruise,
        }
    }

    pub fn phases(&self) -> impl Iterator<Item = &RoadmapPhase> + '_ {
        RoadmapStage::ordered()
            .into_iter()
            .map(move |stage| self.phase(stage))
    }
}
