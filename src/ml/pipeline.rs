//! Dataset transformation pipeline
//!
//! Transformers are applied left-to-right, single pass. The first step to
//! fail aborts the run and its error propagates unchanged.

use crate::error::Result;
use crate::frame::DataFrame;

/// A single dataset-to-dataset transformation step
pub trait Transformer {
    /// Transform the dataset
    fn transform(&self, df: &DataFrame) -> Result<DataFrame>;

    /// Learn anything the step needs from the dataset
    ///
    /// The steps in this crate are stateless, so the default is a no-op.
    fn fit(&mut self, _df: &DataFrame) -> Result<()> {
        Ok(())
    }

    /// Fit on the dataset, then transform it
    fn fit_transform(&mut self, df: &DataFrame) -> Result<DataFrame> {
        self.fit(df)?;
        self.transform(df)
    }
}

/// Ordered chain of transformation steps
pub struct Pipeline {
    transformers: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Pipeline {
            transformers: Vec::new(),
        }
    }

    /// Append a transformer to the chain
    pub fn add_transformer<T: Transformer + 'static>(&mut self, transformer: T) -> &mut Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// Run every step in order
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut result = df.clone();
        for transformer in &self.transformers {
            result = transformer.transform(&result)?;
        }
        Ok(result)
    }

    /// Fit every step in order, threading each step's output into the next
    pub fn fit(&mut self, df: &DataFrame) -> Result<()> {
        let mut current = df.clone();
        for transformer in &mut self.transformers {
            transformer.fit(&current)?;
            current = transformer.transform(&current)?;
        }
        Ok(())
    }

    /// Fit and transform in one pass
    pub fn fit_transform(&mut self, df: &DataFrame) -> Result<DataFrame> {
        let mut result = df.clone();
        for transformer in &mut self.transformers {
            result = transformer.fit_transform(&result)?;
        }
        Ok(result)
    }

    /// Number of steps in the chain
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// True when the pipeline has no steps
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
