//! Snack-shop recommendation.
//!
//! Each shop starts with its index in the ranking as score (the busiest shop,
//! first in the table, scores lowest). A building mention then swings every
//! score by one point:
//!
//! ```text
//! mentions building 7       -> Building-7 bar +1, every other shop -1
//! mentions another building -> Building-7 bar -1, every other shop +1
//! no building               -> unchanged
//! ```
//!
//! The highest score wins; ties go to the shop listed first.

use crate::Answer;
use crate::config::SnackShopRanking;
use crate::rules::helpers::BuildingMention;
use crate::rules::messages;

/// Name of the snack bar in building 7, as it appears in the ranking table.
pub const BUILDING_SEVEN_BAR: &str = "Bar do Prédio 7";

const BUILDING_SEVEN: u32 = 7;

/// Final score for every shop, in ranking order.
pub fn score_shops<'a>(ranking: &'a SnackShopRanking, question: &str) -> Vec<(&'a str, i64)> {
    let mention = BuildingMention::scan(question);

    ranking
        .shops
        .iter()
        .enumerate()
        .map(|(idx, shop)| {
            let is_building_bar = shop == BUILDING_SEVEN_BAR;
            let swing = match &mention {
                BuildingMention::None => 0,
                m if m.mentions(BUILDING_SEVEN) => {
                    if is_building_bar {
                        1
                    } else {
                        -1
                    }
                }
                _ => {
                    if is_building_bar {
                        -1
                    } else {
                        1
                    }
                }
            };
            (shop.as_str(), idx as i64 + swing)
        })
        .collect()
}

/// Shop with the strictly highest score; earlier entries win ties.
pub fn pick_shop<'a>(ranking: &'a SnackShopRanking, question: &str) -> Option<&'a str> {
    score_shops(ranking, question)
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(shop, _)| shop)
}

pub fn evaluate_snacks(ranking: &SnackShopRanking, question: &str) -> Vec<Answer> {
    let mut answers = Vec::with_capacity(2);

    // Rankings are validated non-empty at load time.
    if let Some(shop) = pick_shop(ranking, question) {
        tracing::debug!(shop, "snack shop selected");
        answers.push(Answer::advice(messages::snack_recommendation(shop)));
    }
    answers.push(Answer::tip(messages::SNACKS_TIP));
    answers
}
