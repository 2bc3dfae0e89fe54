use crate::constants::SIMULATED_DATA_SUFFIX;
use crate::models::{DemographicSummary, NationalityCount, SummarySource};

/// Precomputed figures served when the live table cannot be fetched.
#[derive(Debug, Clone, Copy)]
pub struct MockDemographicRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub population_total: u64,
    pub population_spanish: u64,
    pub population_foreign: u64,
    /// Sorted descending by count
    pub breakdown: &'static [(&'static str, u64)],
}

pub const MOCK_DEMOGRAPHICS: &[MockDemographicRecord] = &[
    MockDemographicRecord {
        id: "28079",
        name: "Madrid",
        population_total: 3_332_035,
        population_spanish: 2_758_110,
        population_foreign: 573_925,
        breakdown: &[
            ("Rumanía", 39_540),
            ("Colombia", 38_820),
            ("Venezuela", 37_190),
            ("China", 34_870),
            ("Perú", 30_110),
            ("Marruecos", 24_300),
            ("Honduras", 23_950),
            ("Paraguay", 22_180),
            ("Italia", 21_870),
            ("Ecuador", 16_420),
        ],
    },
    MockDemographicRecord {
        id: "08019",
        name: "Barcelona",
        population_total: 1_655_956,
        population_spanish: 1_294_262,
        population_foreign: 361_694,
        breakdown: &[
            ("Italia", 35_180),
            ("Pakistán", 22_640),
            ("China", 21_950),
            ("Colombia", 19_780),
            ("Francia", 16_150),
            ("Honduras", 14_360),
            ("Marruecos", 13_020),
            ("Perú", 12_970),
            ("Venezuela", 12_510),
            ("Argentina", 11_480),
        ],
    },
    MockDemographicRecord {
        id: "46250",
        name: "Valencia",
        population_total: 807_693,
        population_spanish: 679_220,
        population_foreign: 128_473,
        breakdown: &[
            ("Colombia", 13_210),
            ("Rumanía", 10_160),
            ("Italia", 9_840),
            ("China", 8_270),
            ("Venezuela", 7_950),
            ("Ucrania", 6_120),
            ("Marruecos", 5_480),
            ("Bolivia", 5_010),
            ("Pakistán", 4_620),
            ("Argentina", 4_330),
        ],
    },
    MockDemographicRecord {
        id: "46078",
        name: "Burjassot",
        population_total: 40_634,
        population_spanish: 34_040,
        population_foreign: 6_594,
        breakdown: &[
            ("Colombia", 812),
            ("Rumanía", 703),
            ("Marruecos", 655),
            ("Venezuela", 510),
            ("Italia", 402),
            ("China", 318),
            ("Argentina", 261),
            ("Ucrania", 244),
            ("Bolivia", 198),
            ("Pakistán", 176),
        ],
    },
];

impl MockDemographicRecord {
    /// The record as a summary whose name carries the simulated-data marker.
    pub fn to_summary(&self) -> DemographicSummary {
        DemographicSummary {
            municipality_name: format!("{} {SIMULATED_DATA_SUFFIX}", self.name),
            population_total: self.population_total,
            population_spanish: self.population_spanish,
            population_foreign: self.population_foreign,
            nationality_breakdown: self
                .breakdown
                .iter()
                .map(|&(name, value)| NationalityCount::new(name, value))
                .collect(),
            source: SummarySource::Mock,
        }
    }
}

/// Mock summary for `municipality_id`, if one exists.
pub fn mock_summary(municipality_id: &str) -> Option<DemographicSummary> {
    MOCK_DEMOGRAPHICS
        .iter()
        .find(|record| record.id == municipality_id)
        .map(MockDemographicRecord::to_summary)
}
