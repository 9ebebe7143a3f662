//! Pre-trained spending classifier. One ONNX session is built at startup and
//! shared read-only across requests; each prediction is a synchronous,
//! stateless call taking a [1, 3] f32 vector and returning a score in [0, 1].

use std::path::Path;

use ndarray::{Array2, CowArray};
use ort::{Environment, GraphOptimizationLevel, Session, SessionBuilder, Value};

use crate::analysis::features::FeatureVector;

pub const LABEL_CUTOFF: f32 = 0.5;

pub fn prediction_label(score: f32) -> &'static str {
    if score > LABEL_CUTOFF {
        "High Spending"
    } else {
        "Normal Spending"
    }
}

/// Downloads the model file when it is not on disk yet and a source url is
/// configured. Runs once at startup, before the session is built.
pub async fn ensure_model_file(path: &str, url: Option<&str>) -> Result<(), anyhow::Error> {
    if Path::new(path).exists() {
        return Ok(());
    }

    let url = match url {
        Some(url) => url,
        None => anyhow::bail!("model file {path} is missing and no model url is configured"),
    };

    log::info!("Downloading spending model from {}", url);
    let bytes = reqwest::get(url).await?.error_for_status()?.bytes().await?;
    tokio::fs::write(path, &bytes).await?;

    Ok(())
}

pub struct SpendingClassifier {
    session: Session,
}

impl SpendingClassifier {
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let environment = Environment::builder()
            .with_name("ezmoney-insight")
            .build()?
            .into_arc();

        let session = SessionBuilder::new(&environment)?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_model_from_file(path)?;

        Ok(SpendingClassifier { session })
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<f32, anyhow::Error> {
        let input = CowArray::from(Array2::from_shape_vec(
            (1, FeatureVector::DIM),
            features.to_vec(),
        )?)
        .into_dyn();

        let inputs = vec![Value::from_array(self.session.allocator(), &input)?];
        let outputs = self.session.run(inputs)?;

        let tensor = outputs[0].try_extract::<f32>()?;
        let score = tensor
            .view()
            .iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("model returned an empty output tensor"))?;

        Ok(score.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_cutoff_splits_at_half() {
        assert_eq!(prediction_label(0.0), "Normal Spending");
        assert_eq!(prediction_label(0.5), "Normal Spending");
        assert_eq!(prediction_label(0.51), "High Spending");
        assert_eq!(prediction_label(1.0), "High Spending");
    }
}
