//! Ordered producer chains.

use std::fmt;
use std::sync::Arc;

use crate::style::error::StyleError;
use crate::style::object::StyleObject;
use crate::style::value::StyleBag;
use crate::system::producer::StyleProducer;
use crate::theme::Theme;

/// An explicit, ordered list of producers.
///
/// Outputs are deep-merged in order: a later producer overrides values set by
/// an earlier one and merges into its nested blocks. Cloning is cheap; the
/// producers are shared.
#[derive(Clone, Default)]
pub struct Compose {
    producers: Vec<Arc<dyn StyleProducer>>,
}

impl Compose {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a producer (builder).
    pub fn with(mut self, producer: impl StyleProducer + 'static) -> Self {
        self.push(producer);
        self
    }

    pub fn push(&mut self, producer: impl StyleProducer + 'static) {
        self.producers.push(Arc::new(producer));
    }

    /// Append every producer of `other`, keeping its order.
    pub fn extend(mut self, other: &Compose) -> Self {
        self.producers.extend(other.producers.iter().cloned());
        self
    }

    pub fn len(&self) -> usize {
        self.producers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }

    /// Producer names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.producers.iter().map(|p| p.name()).collect()
    }
}

impl StyleProducer for Compose {
    fn name(&self) -> &str {
        "compose"
    }

    fn produce(&self, props: &StyleBag, theme: &Theme) -> Result<StyleObject, StyleError> {
        let mut merged = StyleObject::new();
        for producer in &self.producers {
            let out = producer.produce(props, theme)?;
            log::trace!("producer `{}` emitted {} entries", producer.name(), out.len());
            merged.merge_in(&out);
        }
        Ok(merged)
    }
}

impl fmt::Debug for Compose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
