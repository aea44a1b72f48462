use super::candidate::Alternative;
use std::cmp::Ordering;

/// orders candidates best-first: savings percentage descending, then
/// absolute savings descending, then comfort penalty ascending so the
/// less disruptive option wins a dead heat.
pub fn rank_alternatives(alternatives: &mut [Alternative]) {
    alternatives.sort_by(compare);
}

fn compare(a: &Alternative, b: &Alternative) -> Ordering {
    b.savings
        .percentage
        .total_cmp(&a.savings.percentage)
        .then(b.savings.absolute_kg.total_cmp(&a.savings.absolute_kg))
        .then(
            a.tradeoffs
                .comfort_penalty()
                .total_cmp(&b.tradeoffs.comfort_penalty()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::alternatives::candidate::{
        AlternativeStrategy, AlternativeTotal, Savings, Tradeoffs,
    };
    use crate::model::assess::EmissionBreakdown;

    fn candidate(
        strategy: AlternativeStrategy,
        percentage: f64,
        absolute_kg: f64,
        comfort_score: f64,
    ) -> Alternative {
        Alternative {
            alternative_id: format!("alt_{}", strategy.as_str()),
            strategy,
            total: AlternativeTotal {
                co2e_kg: 100.0 - absolute_kg,
                breakdown: EmissionBreakdown::default(),
            },
            savings: Savings {
                absolute_kg,
                percentage,
                label: Savings::label_for_percentage(percentage).to_string(),
            },
            segments: Vec::new(),
            tradeoffs: Tradeoffs {
                time_difference_minutes: 0,
                estimated_cost_difference_eur: 0.0,
                comfort_score,
            },
            recommendation_reason: String::new(),
        }
    }

    #[test]
    fn test_sorted_by_savings_percentage() {
        let mut alternatives = vec![
            candidate(AlternativeStrategy::EcoHotel, 12.0, 8.0, 4.0),
            candidate(AlternativeStrategy::Combined, 90.0, 60.0, 4.3),
            candidate(AlternativeStrategy::RailSubstitution, 85.0, 55.0, 4.5),
        ];
        rank_alternatives(&mut alternatives);
        assert_eq!(alternatives[0].strategy, AlternativeStrategy::Combined);
        assert_eq!(
            alternatives[1].strategy,
            AlternativeStrategy::RailSubstitution
        );
    }

    #[test]
    fn test_comfort_breaks_exact_ties() {
        let mut alternatives = vec![
            candidate(AlternativeStrategy::Combined, 40.0, 20.0, 4.3),
            candidate(AlternativeStrategy::RailSubstitution, 40.0, 20.0, 4.5),
        ];
        rank_alternatives(&mut alternatives);
        // 4.5 comfort has the lower penalty
        assert_eq!(
            alternatives[0].strategy,
            AlternativeStrategy::RailSubstitution
        );
    }
}
