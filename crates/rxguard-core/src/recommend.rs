//! Priority-banded recommendations derived from matched interactions.

use rxguard_contracts::{
    interaction::MatchedInteraction,
    report::{Priority, Recommendation},
    rule::SeverityBucket,
};

fn priority_for(bucket: SeverityBucket) -> Priority {
    match bucket {
        SeverityBucket::Contraindicated => Priority::Critical,
        SeverityBucket::Major => Priority::High,
        SeverityBucket::Moderate => Priority::Medium,
        SeverityBucket::Minor => Priority::Low,
    }
}

fn action_for(bucket: SeverityBucket) -> &'static str {
    match bucket {
        SeverityBucket::Contraindicated => {
            "Do not co-administer. Contact the prescriber before the next dose and switch to a suggested alternative."
        }
        SeverityBucket::Major => {
            "Review with the prescriber. Continue only with close monitoring or a dose adjustment."
        }
        SeverityBucket::Moderate => {
            "Monitor for adverse effects and consider adjusting dose or administration timing."
        }
        SeverityBucket::Minor => "Be aware of the interaction. No change is usually required.",
    }
}

fn title_for(bucket: SeverityBucket, count: usize) -> String {
    let noun = if count == 1 { "interaction" } else { "interactions" };
    format!("{} {} {} detected", count, bucket.label(), noun)
}

/// Build recommendations for a set of interactions.
///
/// With no interactions the result is a single `Info` entry. Otherwise there
/// is one entry per non-empty severity bucket, most severe first, listing
/// the `"drugA + drugB"` pairs in that bucket.
pub fn generate_recommendations(interactions: &[MatchedInteraction]) -> Vec<Recommendation> {
    if interactions.is_empty() {
        return vec![Recommendation {
            priority: Priority::Info,
            title: "No significant interactions found".to_string(),
            action: "Continue the current regimen and re-check whenever a medication changes."
                .to_string(),
            pairs: Vec::new(),
        }];
    }

    SeverityBucket::ALL
        .into_iter()
        .filter_map(|bucket| {
            let pairs: Vec<String> = interactions
                .iter()
                .filter(|i| i.severity.bucket() == bucket)
                .map(MatchedInteraction::pair_label)
                .collect();
            if pairs.is_empty() {
                return None;
            }
            Some(Recommendation {
                priority: priority_for(bucket),
                title: title_for(bucket, pairs.len()),
                action: action_for(bucket).to_string(),
                pairs,
            })
        })
        .collect()
}
