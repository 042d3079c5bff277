use thiserror::Error;

use crate::model::{ANNOTATION_PREFIX, RuleBlock, RuleModel, TrendLabel};

#[derive(Debug, Error)]
pub enum DataError {
    #[error("rule block '{annotation}' has no rules")]
    EmptyRuleBlock { annotation: String },
}

/// Rejects models that would break the mean computation. Called by
/// the loader so a bad file fails at startup, not mid-request.
pub fn validate_model(model: &RuleModel) -> Result<(), DataError> {
    for block in &model.aggregated_rules {
        if block.rules.is_empty() {
            return Err(DataError::EmptyRuleBlock {
                annotation: block.annotation.clone(),
            });
        }
    }
    Ok(())
}

/// Selects the label of the rule block with the highest mean score.
///
/// Comparison is strict `>`, so on equal means the first block in
/// input order wins. `Ok(None)` means the model has no blocks at all,
/// which callers render as "no prediction" rather than a failure.
pub fn select_trend(model: &RuleModel) -> Result<Option<TrendLabel>, DataError> {
    validate_model(model)?;

    let mut best: Option<(f64, &RuleBlock)> = None;
    for block in &model.aggregated_rules {
        let mean = block.rules.iter().map(|rule| rule.score).sum::<f64>() / block.rules.len() as f64;
        match best {
            Some((best_mean, _)) if mean <= best_mean => {}
            _ => best = Some((mean, block)),
        }
    }

    Ok(best.map(|(_, block)| {
        let label = block
            .annotation
            .strip_prefix(ANNOTATION_PREFIX)
            .unwrap_or(&block.annotation);
        TrendLabel::from(label)
    }))
}
