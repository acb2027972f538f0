//! Insight context building - serializes a user's domain snapshot to text.
//!
//! The completion API only ever sees this rendered context plus the chat
//! history; it has no access to the store. The section layout (profile,
//! settings, badges, wishlist, recent purchases, tax items, achievements,
//! spending summary) is what the coaching prompt is written against, so
//! changes here must stay in step with [`system_prompt`].

use crate::{
    core::{adhd_tax, profile, purchases, rewards, wishlist},
    entities::{
        RewardKind, UserSettings, UserStats, WishlistStatus, adhd_tax_item, purchase, reward,
        wishlist_item,
    },
    errors::Result,
};
use sea_orm::{ActiveEnum, DatabaseConnection};
use std::collections::HashMap;

/// How many purchases and tax items the context includes.
const RECENT_ITEMS: usize = 10;
/// How many reward entries the context includes.
const RECENT_REWARDS: usize = 5;

/// Everything the insight proxy knows about one user.
#[derive(Debug, Clone)]
pub struct UserSnapshot {
    /// Profile aggregates
    pub stats: UserStats,
    /// Profile settings
    pub settings: UserSettings,
    /// Earned badge ids
    pub badges: Vec<String>,
    /// Full wishlist, newest first
    pub wishlist: Vec<wishlist_item::Model>,
    /// Purchase history, newest first
    pub purchases: Vec<purchase::Model>,
    /// ADHD-tax ledger, newest first
    pub adhd_tax_items: Vec<adhd_tax_item::Model>,
    /// Reward ledger, newest first
    pub rewards: Vec<reward::Model>,
}

/// Loads the complete snapshot for a user from the store.
pub async fn load_snapshot(db: &DatabaseConnection, user_id: &str) -> Result<UserSnapshot> {
    let user = profile::get_or_init_profile(db, user_id).await?;

    Ok(UserSnapshot {
        stats: user.stats(),
        settings: user.settings(),
        badges: rewards::get_badges(db, user_id).await?,
        wishlist: wishlist::get_wishlist(db, user_id).await?,
        purchases: purchases::get_purchases(db, user_id).await?,
        adhd_tax_items: adhd_tax::get_items(db, user_id).await?,
        rewards: rewards::get_rewards(db, user_id).await?,
    })
}

/// Renders the snapshot into the sectioned plain-text context the completion
/// API receives.
#[must_use]
pub fn build_context(snapshot: &UserSnapshot) -> String {
    let mut parts = Vec::new();

    parts.push("=== USER PROFILE ===".to_string());
    parts.push(format!("Level: {}", snapshot.stats.current_level));
    parts.push(format!("Current Streak: {} days", snapshot.stats.current_streak));
    parts.push(format!("Longest Streak: {} days", snapshot.stats.longest_streak));
    parts.push(format!("Total Points: {}", snapshot.stats.total_points_earned));
    parts.push(format!("Total Saved: ${:.2}", snapshot.stats.total_saved));
    parts.push(format!("Total Spent: ${:.2}", snapshot.stats.total_spent));
    parts.push(format!("ADHD Tax Total: ${:.2}", snapshot.stats.adhd_tax_total));

    parts.push("\n=== USER SETTINGS ===".to_string());
    parts.push(format!(
        "Impulse Threshold: ${}",
        snapshot.settings.impulse_threshold
    ));
    parts.push(format!(
        "Cooldown Period: {} hours",
        snapshot.settings.cooldown_hours
    ));
    parts.push(format!(
        "Monthly Budget: {}",
        snapshot
            .settings
            .monthly_budget
            .map_or_else(|| "Not set".to_string(), |budget| format!("${budget}"))
    ));
    parts.push(format!("Currency: {}", snapshot.settings.currency));

    if !snapshot.badges.is_empty() {
        parts.push("\n=== EARNED BADGES ===".to_string());
        parts.push(snapshot.badges.join(", "));
    }

    if !snapshot.wishlist.is_empty() {
        parts.push("\n=== CURRENT WISHLIST ===".to_string());
        for (index, item) in snapshot.wishlist.iter().enumerate() {
            let status = if item.status == WishlistStatus::CoolingDown {
                format!(
                    "(cooling down until {})",
                    item.cooldown_ends_at.format("%Y-%m-%d")
                )
            } else {
                format!("({})", item.status.to_value())
            };
            parts.push(format!(
                "{}. {} - ${} {status}",
                index + 1,
                item.name,
                item.price
            ));
            parts.push(format!("   Category: {}", item.category.to_value()));
            if let Some(ref mood) = item.mood_tag {
                parts.push(format!("   Mood when added: {}", mood.to_value()));
            }
            if let Some(ref context) = item.context_tag {
                parts.push(format!("   Context: {context}"));
            }
            if let Some(ref notes) = item.notes {
                parts.push(format!("   Notes: {notes}"));
            }
        }
    }

    let recent_purchases = &snapshot.purchases[..snapshot.purchases.len().min(RECENT_ITEMS)];
    if !recent_purchases.is_empty() {
        parts.push(format!("\n=== RECENT PURCHASES (Last {RECENT_ITEMS}) ==="));
        for (index, purchase) in recent_purchases.iter().enumerate() {
            let impulse_tag = if purchase.was_impulse {
                "[IMPULSE]"
            } else {
                "[PLANNED]"
            };
            parts.push(format!(
                "{}. {} - ${} {impulse_tag} on {}",
                index + 1,
                purchase.name,
                purchase.amount,
                purchase.date.format("%Y-%m-%d")
            ));
            parts.push(format!("   Category: {}", purchase.category.to_value()));
            if let Some(ref mood) = purchase.mood_tag {
                parts.push(format!("   Mood: {}", mood.to_value()));
            }
            if let Some(ref context) = purchase.context_tag {
                parts.push(format!("   Context: {context}"));
            }
        }
    }

    let recent_tax = &snapshot.adhd_tax_items[..snapshot.adhd_tax_items.len().min(RECENT_ITEMS)];
    if !recent_tax.is_empty() {
        parts.push(format!("\n=== ADHD TAX ITEMS (Last {RECENT_ITEMS}) ==="));
        for (index, item) in recent_tax.iter().enumerate() {
            parts.push(format!(
                "{}. {}: {} - ${} on {}",
                index + 1,
                item.kind.to_value(),
                item.description,
                item.amount,
                item.date.format("%Y-%m-%d")
            ));
            if let Some(ref notes) = item.notes {
                parts.push(format!("   Notes: {notes}"));
            }
        }
    }

    let recent_rewards = &snapshot.rewards[..snapshot.rewards.len().min(RECENT_REWARDS)];
    if !recent_rewards.is_empty() {
        parts.push(format!("\n=== RECENT ACHIEVEMENTS (Last {RECENT_REWARDS}) ==="));
        for (index, reward) in recent_rewards.iter().enumerate() {
            let date = reward.earned_at.format("%Y-%m-%d");
            match reward.kind {
                RewardKind::Points | RewardKind::LevelUp => parts.push(format!(
                    "{}. +{} points: {} ({date})",
                    index + 1,
                    reward.points.unwrap_or(0),
                    reward.description
                )),
                RewardKind::Badge => parts.push(format!(
                    "{}. Badge: {} ({date})",
                    index + 1,
                    reward.description
                )),
            }
        }
    }

    if !recent_purchases.is_empty() {
        parts.push("\n=== SPENDING SUMMARY ===".to_string());

        let mut by_category: HashMap<String, f64> = HashMap::new();
        let mut by_mood: HashMap<String, f64> = HashMap::new();
        let mut impulse_count = 0usize;
        let mut planned_count = 0usize;

        for purchase in recent_purchases {
            *by_category
                .entry(purchase.category.to_value())
                .or_insert(0.0) += purchase.amount;
            if let Some(ref mood) = purchase.mood_tag {
                *by_mood.entry(mood.to_value()).or_insert(0.0) += purchase.amount;
            }
            if purchase.was_impulse {
                impulse_count += 1;
            } else {
                planned_count += 1;
            }
        }

        parts.push(format!(
            "Total Purchases Tracked: {}",
            recent_purchases.len()
        ));
        parts.push(format!("Impulse: {impulse_count} | Planned: {planned_count}"));

        if !by_category.is_empty() {
            parts.push("\nSpending by Category:".to_string());
            for (category, amount) in sorted_by_amount(by_category) {
                parts.push(format!("  {category}: ${amount:.2}"));
            }
        }

        if !by_mood.is_empty() {
            parts.push("\nSpending by Mood:".to_string());
            for (mood, amount) in sorted_by_amount(by_mood) {
                parts.push(format!("  {mood}: ${amount:.2}"));
            }
        }
    }

    parts.join("\n")
}

/// Wraps the rendered context in the coaching system prompt.
#[must_use]
pub fn system_prompt(snapshot: &UserSnapshot) -> String {
    let context = build_context(snapshot);

    format!(
        "You are a supportive financial assistant for ImpulseBuddy, an app designed to help \
ADHD adults practice mindful spending.

CRITICAL INSTRUCTIONS - READ CAREFULLY:
- You MUST respond based ONLY on the ImpulseBuddy user data provided below
- DO NOT use web search capabilities - ignore any web search results
- DO NOT provide general financial advice from external sources
- ONLY analyze and reference the specific data in the USER DATA section below
- If asked about something not in the user's data, acknowledge this and suggest they track it

YOUR ROLE:
- Analyze the user's specific spending patterns and data
- Be encouraging, non-judgmental, and understanding of ADHD challenges
- Offer actionable advice based ONLY on their actual tracked patterns
- Celebrate their wins and help them learn from setbacks
- Reference specific numbers, items, and dates from their profile

RESPONSE RULES:
- DO reference specific purchases, wishlist items, and amounts from the data below
- DO mention their actual streaks, points, and savings numbers
- DO analyze patterns visible in their mood tags and categories
- DO be personal and specific to their journey
- DON'T use information not present in the data below
- DON'T cite external sources or general statistics
- DON'T make up data points

===== USER DATA (YOUR ONLY DATA SOURCE) =====
{context}
===== END OF USER DATA =====

Remember: Base your entire response on the data between the equal signs above. Be specific, \
warm, and helpful using ONLY their ImpulseBuddy information."
    )
}

fn sorted_by_amount(map: HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<_> = map.into_iter().collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}
