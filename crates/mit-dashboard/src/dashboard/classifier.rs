use super::domain::CandidateRecord;

/// Candidates past this training week are eligible for placement.
pub const PLACEMENT_WEEK: f64 = 6.0;

const OFFER_PENDING: &str = "offer pending";
const OFFER_ACCEPTED: &str = "offer accepted";
const TRAINING: &str = "training";
const NON_IDENTIFIED: [&str; 3] = ["free agent discussing opportunity", "unassigned", TRAINING];
const PLACED_OR_PLACING: [&str; 3] = ["position identified", OFFER_PENDING, OFFER_ACCEPTED];

/// Named candidate subsets driving the dashboard counts and lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    OfferPending,
    OfferAccepted,
    NonIdentified,
    ReadyForPlacement,
    InTraining,
}

impl Bucket {
    #[cfg(test)]
    pub(crate) const fn ordered() -> [Self; 5] {
        [
            Self::OfferPending,
            Self::OfferAccepted,
            Self::NonIdentified,
            Self::ReadyForPlacement,
            Self::InTraining,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OfferPending => "Offer Pending",
            Self::OfferAccepted => "Offer Accepted",
            Self::NonIdentified => "Non-Identified",
            Self::ReadyForPlacement => "Ready for Placement",
            Self::InTraining => "In Training",
        }
    }

    /// Expects `record.status` to be normalized already.
    pub fn contains(self, record: &CandidateRecord) -> bool {
        let status = record.status.as_str();
        match self {
            Self::OfferPending => status == OFFER_PENDING,
            Self::OfferAccepted => status == OFFER_ACCEPTED,
            Self::NonIdentified => NON_IDENTIFIED.contains(&status),
            Self::ReadyForPlacement => {
                record.week.is_after(PLACEMENT_WEEK) && !PLACED_OR_PLACING.contains(&status)
            }
            Self::InTraining => status == TRAINING && record.week.is_within(PLACEMENT_WEEK),
        }
    }
}

/// Partitions a roster into buckets. Nothing is cached; every call rescans the slice.
#[derive(Debug, Clone, Copy)]
pub struct CandidateClassifier<'a> {
    records: &'a [CandidateRecord],
}

impl<'a> CandidateClassifier<'a> {
    pub fn new(records: &'a [CandidateRecord]) -> Self {
        Self { records }
    }

    pub fn members(&self, bucket: Bucket) -> Vec<&'a CandidateRecord> {
        self.records
            .iter()
            .filter(|record| bucket.contains(record))
            .collect()
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.records
            .iter()
            .filter(|record| bucket.contains(record))
            .count()
    }

    /// Non-identified candidates followed by accepted offers, each in roster order.
    pub fn all_candidates(&self) -> Vec<&'a CandidateRecord> {
        let mut all = self.members(Bucket::NonIdentified);
        all.extend(self.members(Bucket::OfferAccepted));
        all
    }

    pub fn total_candidates(&self) -> usize {
        self.count(Bucket::NonIdentified) + self.count(Bucket::OfferAccepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::{Week, PLACEHOLDER};
    use crate::dashboard::normalizer::normalize_status;

    fn candidate(name: &str, status: &str, week: Week) -> CandidateRecord {
        CandidateRecord {
            name: name.to_string(),
            training_site: PLACEHOLDER.to_string(),
            location: PLACEHOLDER.to_string(),
            level: PLACEHOLDER.to_string(),
            week,
            status: normalize_status(status),
            salary: 0.0,
        }
    }

    fn names(records: Vec<&CandidateRecord>) -> Vec<&str> {
        records.iter().map(|record| record.name.as_str()).collect()
    }

    fn roster() -> Vec<CandidateRecord> {
        vec![
            candidate("Ada", "Training", Week::Numeric(4.0)),
            candidate("Grace", "Unassigned", Week::Numeric(9.0)),
            candidate("Linus", "Offer Pending ", Week::Numeric(10.0)),
            candidate("Ken", "offer accepted", Week::Numeric(12.0)),
            candidate("Barbara", "Position Identified", Week::Numeric(8.0)),
            candidate("Edsger", "Free Agent Discussing Opportunity", Week::Unknown),
            candidate("Margaret", "training", Week::Numeric(7.0)),
        ]
    }

    #[test]
    fn status_matching_ignores_case_and_padding() {
        let padded = candidate("A", "Offer Pending ", Week::Unknown);
        let plain = candidate("B", "offer pending", Week::Unknown);
        for bucket in Bucket::ordered() {
            assert_eq!(bucket.contains(&padded), bucket.contains(&plain), "{bucket:?}");
        }
    }

    #[test]
    fn buckets_follow_status_and_week_rules() {
        let records = roster();
        let classifier = CandidateClassifier::new(&records);

        assert_eq!(names(classifier.members(Bucket::OfferPending)), ["Linus"]);
        assert_eq!(names(classifier.members(Bucket::OfferAccepted)), ["Ken"]);
        assert_eq!(
            names(classifier.members(Bucket::NonIdentified)),
            ["Ada", "Grace", "Edsger", "Margaret"]
        );
        assert_eq!(
            names(classifier.members(Bucket::ReadyForPlacement)),
            ["Grace", "Margaret"]
        );
        assert_eq!(names(classifier.members(Bucket::InTraining)), ["Ada"]);
    }

    #[test]
    fn all_candidates_appends_accepted_offers() {
        let records = roster();
        let classifier = CandidateClassifier::new(&records);
        assert_eq!(
            names(classifier.all_candidates()),
            ["Ada", "Grace", "Edsger", "Margaret", "Ken"]
        );
        assert_eq!(classifier.total_candidates(), 5);
    }

    #[test]
    fn offer_and_training_buckets_never_overlap_ready() {
        let records = roster();
        let classifier = CandidateClassifier::new(&records);
        let ready = classifier.members(Bucket::ReadyForPlacement);

        for bucket in [Bucket::OfferPending, Bucket::InTraining] {
            for record in classifier.members(bucket) {
                assert!(
                    !ready.iter().any(|other| other.name == record.name),
                    "{} is in both {bucket:?} and ready",
                    record.name
                );
            }
        }
    }

    #[test]
    fn training_in_week_four_is_counted_but_not_ready() {
        let records = vec![candidate("Ada", "Training", Week::Numeric(4.0))];
        let classifier = CandidateClassifier::new(&records);

        assert_eq!(classifier.count(Bucket::InTraining), 1);
        assert_eq!(classifier.count(Bucket::ReadyForPlacement), 0);
        assert_eq!(classifier.count(Bucket::NonIdentified), 1);
        assert_eq!(classifier.total_candidates(), 1);
    }

    #[test]
    fn unknown_week_never_ready_or_in_training() {
        let records = vec![
            candidate("Ada", "training", Week::Unknown),
            candidate("Grace", "unassigned", Week::Unknown),
        ];
        let classifier = CandidateClassifier::new(&records);
        assert_eq!(classifier.count(Bucket::ReadyForPlacement), 0);
        assert_eq!(classifier.count(Bucket::InTraining), 0);
        assert_eq!(classifier.total_candidates(), 2);
    }

    #[test]
    fn empty_roster_has_empty_buckets() {
        let classifier = CandidateClassifier::new(&[]);
        for bucket in Bucket::ordered() {
            assert!(classifier.members(bucket).is_empty());
        }
        assert_eq!(classifier.total_candidates(), 0);
    }
}
