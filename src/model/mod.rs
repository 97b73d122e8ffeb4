pub mod config;
pub mod registry;

pub use config::{Configuration, ModelConfig, CONFIGURATION_FILE};
pub use registry::ModelRegistry;

use crate::error::Result;
use candle_core::Tensor;
use std::collections::HashMap;

/// Named tensor inputs and outputs exchanged with a model.
pub type TensorMap = HashMap<String, Tensor>;

/// Open postprocess configuration, passed through unrecognized at this layer.
pub type PostprocessOptions = serde_json::Map<String, serde_json::Value>;

/// Contract every model implementation satisfies.
///
/// `forward` maps named input tensors to named output tensors; `postprocess`
/// converts raw outputs into a standardized output schema and defaults to the
/// identity. `invoke` composes the two in that fixed order.
pub trait Model {
    fn forward(&self, input: &TensorMap) -> Result<TensorMap>;

    fn postprocess(&self, output: TensorMap, _options: &PostprocessOptions) -> Result<TensorMap> {
        Ok(output)
    }

    fn invoke(&self, input: &TensorMap) -> Result<TensorMap> {
        let output = self.forward(input)?;
        self.postprocess(output, &PostprocessOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candle_core::Device;

    struct Echo;

    impl Model for Echo {
        fn forward(&self, input: &TensorMap) -> Result<TensorMap> {
            Ok(input.clone())
        }
    }

    struct Renaming;

    impl Model for Renaming {
        fn forward(&self, input: &TensorMap) -> Result<TensorMap> {
            Ok(input.clone())
        }

        fn postprocess(
            &self,
            mut output: TensorMap,
            _options: &PostprocessOptions,
        ) -> Result<TensorMap> {
            if let Some(raw) = output.remove("raw") {
                output.insert("logits".to_string(), raw);
            }
            Ok(output)
        }
    }

    fn input_with(key: &str) -> TensorMap {
        let mut map = TensorMap::new();
        let tensor = Tensor::from_slice(&[1f32, 2.0, 3.0], 3, &Device::Cpu).unwrap();
        map.insert(key.to_string(), tensor);
        map
    }

    #[test]
    fn default_postprocess_is_identity() {
        let model = Echo;
        let output = model.invoke(&input_with("tokens")).unwrap();
        assert!(output.contains_key("tokens"));
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn invoke_runs_postprocess_after_forward() {
        let model = Renaming;
        let output = model.invoke(&input_with("raw")).unwrap();
        assert!(output.contains_key("logits"));
        assert!(!output.contains_key("raw"));
    }
}
