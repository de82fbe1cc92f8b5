//! Canonical catalog of HealthKit sample-type identifiers.
//!
//! The lists are maintained by hand and compiled in. Changing the supported
//! universe means editing this file, not the mapping JSON.

use std::collections::BTreeSet;

use hkdoc_model::Category;

/// All known quantity type identifiers.
pub const QUANTITY_TYPES: &[&str] = &[
    "HKQuantityTypeIdentifierActiveEnergyBurned",
    "HKQuantityTypeIdentifierAppleExerciseTime",
    "HKQuantityTypeIdentifierBasalBodyTemperature",
    "HKQuantityTypeIdentifierBasalEnergyBurned",
    "HKQuantityTypeIdentifierBloodAlcoholContent",
    "HKQuantityTypeIdentifierBloodGlucose",
    "HKQuantityTypeIdentifierBloodPressureDiastolic",
    "HKQuantityTypeIdentifierBloodPressureSystolic",
    "HKQuantityTypeIdentifierBodyFatPercentage",
    "HKQuantityTypeIdentifierBodyMass",
    "HKQuantityTypeIdentifierBodyMassIndex",
    "HKQuantityTypeIdentifierBodyTemperature",
    "HKQuantityTypeIdentifierDietaryBiotin",
    "HKQuantityTypeIdentifierDietaryCaffeine",
    "HKQuantityTypeIdentifierDietaryCalcium",
    "HKQuantityTypeIdentifierDietaryCarbohydrates",
    "HKQuantityTypeIdentifierDietaryChloride",
    "HKQuantityTypeIdentifierDietaryCholesterol",
    "HKQuantityTypeIdentifierDietaryChromium",
    "HKQuantityTypeIdentifierDietaryCopper",
    "HKQuantityTypeIdentifierDietaryEnergyConsumed",
    "HKQuantityTypeIdentifierDietaryFatMonounsaturated",
    "HKQuantityTypeIdentifierDietaryFatPolyunsaturated",
    "HKQuantityTypeIdentifierDietaryFatSaturated",
    "HKQuantityTypeIdentifierDietaryFatTotal",
    "HKQuantityTypeIdentifierDietaryFiber",
    "HKQuantityTypeIdentifierDietaryFolate",
    "HKQuantityTypeIdentifierDietaryIodine",
    "HKQuantityTypeIdentifierDietaryIron",
    "HKQuantityTypeIdentifierDietaryMagnesium",
    "HKQuantityTypeIdentifierDietaryManganese",
    "HKQuantityTypeIdentifierDietaryMolybdenum",
    "HKQuantityTypeIdentifierDietaryNiacin",
    "HKQuantityTypeIdentifierDietaryPantothenicAcid",
    "HKQuantityTypeIdentifierDietaryPhosphorus",
    "HKQuantityTypeIdentifierDietaryPotassium",
    "HKQuantityTypeIdentifierDietaryProtein",
    "HKQuantityTypeIdentifierDietaryRiboflavin",
    "HKQuantityTypeIdentifierDietarySelenium",
    "HKQuantityTypeIdentifierDietarySodium",
    "HKQuantityTypeIdentifierDietarySugar",
    "HKQuantityTypeIdentifierDietaryThiamin",
    "HKQuantityTypeIdentifierDietaryVitaminA",
    "HKQuantityTypeIdentifierDietaryVitaminB12",
    "HKQuantityTypeIdentifierDietaryVitaminB6",
    "HKQuantityTypeIdentifierDietaryVitaminC",
    "HKQuantityTypeIdentifierDietaryVitaminD",
    "HKQuantityTypeIdentifierDietaryVitaminE",
    "HKQuantityTypeIdentifierDietaryVitaminK",
    "HKQuantityTypeIdentifierDietaryWater",
    "HKQuantityTypeIdentifierDietaryZinc",
    "HKQuantityTypeIdentifierDistanceCycling",
    "HKQuantityTypeIdentifierDistanceDownhillSnowSports",
    "HKQuantityTypeIdentifierDistanceSwimming",
    "HKQuantityTypeIdentifierDistanceWalkingRunning",
    "HKQuantityTypeIdentifierDistanceWheelchair",
    "HKQuantityTypeIdentifierElectrodermalActivity",
    "HKQuantityTypeIdentifierFlightsClimbed",
    "HKQuantityTypeIdentifierForcedExpiratoryVolume1",
    "HKQuantityTypeIdentifierForcedVitalCapacity",
    "HKQuantityTypeIdentifierHeartRate",
    "HKQuantityTypeIdentifierHeartRateVariabilitySDNN",
    "HKQuantityTypeIdentifierHeight",
    "HKQuantityTypeIdentifierInhalerUsage",
    "HKQuantityTypeIdentifierInsulinDelivery",
    "HKQuantityTypeIdentifierLeanBodyMass",
    "HKQuantityTypeIdentifierNikeFuel",
    "HKQuantityTypeIdentifierNumberOfTimesFallen",
    "HKQuantityTypeIdentifierOxygenSaturation",
    "HKQuantityTypeIdentifierPeakExpiratoryFlowRate",
    "HKQuantityTypeIdentifierPeripheralPerfusionIndex",
    "HKQuantityTypeIdentifierPushCount",
    "HKQuantityTypeIdentifierRespiratoryRate",
    "HKQuantityTypeIdentifierRestingHeartRate",
    "HKQuantityTypeIdentifierStepCount",
    "HKQuantityTypeIdentifierSwimmingStrokeCount",
    "HKQuantityTypeIdentifierUVExposure",
    "HKQuantityTypeIdentifierVO2Max",
    "HKQuantityTypeIdentifierWaistCircumference",
    "HKQuantityTypeIdentifierWalkingHeartRateAverage",
];

/// All known correlation type identifiers.
pub const CORRELATION_TYPES: &[&str] = &[
    "HKCorrelationTypeIdentifierBloodPressure",
    "HKCorrelationTypeIdentifierFood",
];

/// All known category type identifiers.
pub const CATEGORY_TYPES: &[&str] = &[
    "HKCategoryTypeIdentifierAbdominalCramps",
    "HKCategoryTypeIdentifierAcne",
    "HKCategoryTypeIdentifierAppetiteChanges",
    "HKCategoryTypeIdentifierAppleStandHour",
    "HKCategoryTypeIdentifierAppleWalkingSteadinessEvent",
    "HKCategoryTypeIdentifierBladderIncontinence",
    "HKCategoryTypeIdentifierBloating",
    "HKCategoryTypeIdentifierBreastPain",
    "HKCategoryTypeIdentifierCervicalMucusQuality",
    "HKCategoryTypeIdentifierChestTightnessOrPain",
    "HKCategoryTypeIdentifierChills",
    "HKCategoryTypeIdentifierConstipation",
    "HKCategoryTypeIdentifierContraceptive",
    "HKCategoryTypeIdentifierCoughing",
    "HKCategoryTypeIdentifierDizziness",
    "HKCategoryTypeIdentifierDrySkin",
    "HKCategoryTypeIdentifierEnvironmentalAudioExposureEvent",
    "HKCategoryTypeIdentifierFainting",
    "HKCategoryTypeIdentifierFever",
    "HKCategoryTypeIdentifierGeneralizedBodyAche",
    "HKCategoryTypeIdentifierHairLoss",
    "HKCategoryTypeIdentifierHandwashingEvent",
    "HKCategoryTypeIdentifierHeadache",
    "HKCategoryTypeIdentifierHeadphoneAudioExposureEvent",
    "HKCategoryTypeIdentifierHeartburn",
    "HKCategoryTypeIdentifierHighHeartRateEvent",
    "HKCategoryTypeIdentifierHotFlashes",
    "HKCategoryTypeIdentifierInfrequentMenstrualCycles",
    "HKCategoryTypeIdentifierIntermenstrualBleeding",
    "HKCategoryTypeIdentifierIrregularHeartRhythmEvent",
    "HKCategoryTypeIdentifierIrregularMenstrualCycles",
    "HKCategoryTypeIdentifierLactation",
    "HKCategoryTypeIdentifierLossOfSmell",
    "HKCategoryTypeIdentifierLossOfTaste",
    "HKCategoryTypeIdentifierLowCardioFitnessEvent",
    "HKCategoryTypeIdentifierLowHeartRateEvent",
    "HKCategoryTypeIdentifierLowerBackPain",
    "HKCategoryTypeIdentifierMemoryLapse",
    "HKCategoryTypeIdentifierMenstrualFlow",
    "HKCategoryTypeIdentifierMindfulSession",
    "HKCategoryTypeIdentifierMoodChanges",
    "HKCategoryTypeIdentifierNausea",
    "HKCategoryTypeIdentifierNightSweats",
    "HKCategoryTypeIdentifierOvulationTestResult",
    "HKCategoryTypeIdentifierPelvicPain",
    "HKCategoryTypeIdentifierPersistentIntermenstrualBleeding",
    "HKCategoryTypeIdentifierPregnancyTestResult",
    "HKCategoryTypeIdentifierProgesteroneTestResult",
    "HKCategoryTypeIdentifierProlongedMenstrualPeriods",
    "HKCategoryTypeIdentifierRapidPoundingOrFlutteringHeartbeat",
    "HKCategoryTypeIdentifierRunnyNose",
    "HKCategoryTypeIdentifierSexualActivity",
    "HKCategoryTypeIdentifierShortnessOfBreath",
    "HKCategoryTypeIdentifierSinusCongestion",
    "HKCategoryTypeIdentifierSkippedHeartbeat",
    "HKCategoryTypeIdentifierSleepAnalysis",
    "HKCategoryTypeIdentifierSoreThroat",
    "HKCategoryTypeIdentifierToothbrushingEvent",
    "HKCategoryTypeIdentifierVaginalDryness",
    "HKCategoryTypeIdentifierVomiting",
    "HKCategoryTypeIdentifierWheezing",
];

/// All clinical record type identifiers.
pub const CLINICAL_TYPES: &[&str] = &[
    "HKClinicalTypeIdentifierAllergyRecord",
    "HKClinicalTypeIdentifierClinicalNoteRecord",
    "HKClinicalTypeIdentifierConditionRecord",
    "HKClinicalTypeIdentifierCoverageRecord",
    "HKClinicalTypeIdentifierImmunizationRecord",
    "HKClinicalTypeIdentifierLabResultRecord",
    "HKClinicalTypeIdentifierMedicationRecord",
    "HKClinicalTypeIdentifierProcedureRecord",
    "HKClinicalTypeIdentifierVitalSignRecord",
];

/// Canonical identifiers of a category, in catalog order.
pub fn canonical_identifiers(category: Category) -> &'static [&'static str] {
    match category {
        Category::Quantity => QUANTITY_TYPES,
        Category::Correlation => CORRELATION_TYPES,
        Category::Category => CATEGORY_TYPES,
        Category::Clinical => CLINICAL_TYPES,
    }
}

/// Identifier prefix shared by every canonical identifier of a category.
pub fn identifier_prefix(category: Category) -> &'static str {
    match category {
        Category::Quantity => "HKQuantityTypeIdentifier",
        Category::Correlation => "HKCorrelationTypeIdentifier",
        Category::Category => "HKCategoryTypeIdentifier",
        Category::Clinical => "HKClinicalTypeIdentifier",
    }
}

/// Entries that occur more than once, in first-repeat order.
pub fn find_duplicates<'a>(identifiers: &[&'a str]) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for identifier in identifiers {
        if !seen.insert(*identifier) && !duplicates.contains(identifier) {
            duplicates.push(*identifier);
        }
    }
    duplicates
}

/// Entries that do not carry `prefix` exactly once at the start.
///
/// Catches two adjacent list entries merged by a missing delimiter, e.g.
/// `...DietaryFatTotalHKQuantityTypeIdentifierDietaryFiber`.
pub fn find_malformed<'a>(prefix: &str, identifiers: &[&'a str]) -> Vec<&'a str> {
    identifiers
        .iter()
        .copied()
        .filter(|identifier| {
            let suffix = match identifier.strip_prefix(prefix) {
                Some(suffix) => suffix,
                None => return true,
            };
            suffix.is_empty() || suffix.contains(prefix)
        })
        .collect()
}

/// Integrity findings for one category's canonical list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssues {
    pub category: Category,
    pub duplicates: Vec<&'static str>,
    pub malformed: Vec<&'static str>,
}

impl CatalogIssues {
    pub fn is_empty(&self) -> bool {
        self.duplicates.is_empty() && self.malformed.is_empty()
    }
}

/// Check every canonical list for duplicates and malformed entries.
pub fn verify_catalog() -> Vec<CatalogIssues> {
    Category::ALL
        .iter()
        .map(|&category| {
            let identifiers = canonical_identifiers(category);
            CatalogIssues {
                category,
                duplicates: find_duplicates(identifiers),
                malformed: find_malformed(identifier_prefix(category), identifiers),
            }
        })
        .collect()
}
