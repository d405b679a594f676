// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch assembly over already-fetched rows

use std::cmp::Reverse;
use tracing::info;

use crate::classify::{EventClassifier, GroupClassification};
use crate::errors::ClassificationError;
use crate::tracing::spans;
use crate::transfers::{group_by_hash, GroupedTransfers, RawTransferRow};
use crate::types::events::{FeedEvent, TokenTransaction};

/// Build the general feed for the classifier's viewer
///
/// Groups `rows` by hash, classifies every group and sorts the events newest
/// first. Events sharing a timestamp keep their group order.
///
/// # Errors
///
/// The first classification failure aborts the whole batch.
pub fn assemble_feed_events(
    rows: Vec<RawTransferRow>,
    classifier: &EventClassifier<'_>,
) -> Result<Vec<FeedEvent>, ClassificationError> {
    let row_count = rows.len();
    let groups = group_by_hash(rows);

    let mut events = classify_groups(&groups, classifier, |classification| {
        classifier.to_feed_event(classification)
    })?;
    events.sort_by_key(|event| Reverse(event.timestamp));

    info!(
        viewer = %classifier.viewer(),
        rows = row_count,
        groups = groups.len(),
        events = events.len(),
        "Assembled activity feed"
    );

    Ok(events)
}

/// Build the verification-rewards feed for the classifier's viewer
///
/// Rows are not grouped: every row sent by the rewards account becomes one
/// `VERIFICATION_REWARD` event.
pub fn assemble_reward_events(
    rows: Vec<RawTransferRow>,
    classifier: &EventClassifier<'_>,
) -> Result<Vec<FeedEvent>, ClassificationError> {
    let rewards_address = classifier.config().verification_rewards_address;

    let mut events = rows
        .iter()
        .filter(|row| row.from == rewards_address)
        .map(|row| classifier.reward_event(row))
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by_key(|event| Reverse(event.timestamp));

    info!(
        viewer = %classifier.viewer(),
        rows = rows.len(),
        events = events.len(),
        "Assembled rewards feed"
    );

    Ok(events)
}

/// Build the token-scoped feed for `token`
///
/// Like [`assemble_feed_events`], then keeps only entries whose amount is
/// denominated in `token`.
pub fn assemble_token_transactions(
    rows: Vec<RawTransferRow>,
    classifier: &EventClassifier<'_>,
    token: &str,
) -> Result<Vec<TokenTransaction>, ClassificationError> {
    let row_count = rows.len();
    let groups = group_by_hash(rows);

    let mut transactions = classify_groups(&groups, classifier, |classification| {
        classifier.to_token_transaction(classification, token)
    })?;
    let classified = transactions.len();
    transactions.sort_by_key(|transaction| Reverse(transaction.timestamp));
    transactions.retain(|transaction| transaction.amount.currency_code == token);

    info!(
        viewer = %classifier.viewer(),
        token,
        rows = row_count,
        groups = groups.len(),
        classified,
        events = transactions.len(),
        "Assembled token feed"
    );

    Ok(transactions)
}

fn classify_groups<T>(
    groups: &GroupedTransfers,
    classifier: &EventClassifier<'_>,
    mut render: impl FnMut(&GroupClassification<'_>) -> Result<T, ClassificationError>,
) -> Result<Vec<T>, ClassificationError> {
    let mut rendered = Vec::with_capacity(groups.len());

    for group in groups {
        let _span = spans::classify_group(group.hash(), group.len()).entered();
        if let Some(classification) = classifier.classify(group)? {
            rendered.push(render(&classification)?);
        }
    }

    Ok(rendered)
}
