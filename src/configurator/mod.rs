//! Message configurator contract and chain composite.
//!
//! A configurator applies one piece of channel policy to a channel-native
//! message (default sender, locale headers, subject mapping) without the
//! content engine or the transport knowing about it. Configurators compose
//! through [`ConfiguratorChain`], which implements the same contract, so
//! chains nest inside other chains.

use tracing::trace;

use crate::delivery::Delivery;
use crate::error::Result;

/// One unit of message decoration for messages of type `M`.
///
/// Implementations mutate the message in place using the delivery context.
/// An error aborts the send for this message; the chain does not continue
/// past a failing configurator.
pub trait Configurator<M>: Send + Sync {
    fn configure(&self, message: &mut M, delivery: &Delivery) -> Result<()>;
}

impl<M, F> Configurator<M> for F
where
    F: Fn(&mut M, &Delivery) -> Result<()> + Send + Sync,
{
    fn configure(&self, message: &mut M, delivery: &Delivery) -> Result<()> {
        self(message, delivery)
    }
}

/// Ordered composite of configurators.
///
/// Children run in registration order against the same `(message, delivery)`
/// pair, each observing the mutations of the previous ones. The composition
/// is fixed at construction; the chain itself is read-only afterwards and
/// safe to share across concurrent sends.
pub struct ConfiguratorChain<M> {
    configurators: Vec<Box<dyn Configurator<M>>>,
}

impl<M> ConfiguratorChain<M> {
    pub fn new(configurators: Vec<Box<dyn Configurator<M>>>) -> Self {
        Self { configurators }
    }

    /// Chain with no children; configuring through it is a no-op.
    pub fn empty() -> Self {
        Self {
            configurators: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.configurators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurators.is_empty()
    }
}

impl<M> From<Vec<Box<dyn Configurator<M>>>> for ConfiguratorChain<M> {
    fn from(configurators: Vec<Box<dyn Configurator<M>>>) -> Self {
        Self::new(configurators)
    }
}

impl<M> Configurator<M> for ConfiguratorChain<M> {
    fn configure(&self, message: &mut M, delivery: &Delivery) -> Result<()> {
        trace!(
            children = self.configurators.len(),
            channel = %delivery.channel(),
            "running configurator chain"
        );
        for configurator in &self.configurators {
            configurator.configure(message, delivery)?;
        }
        Ok(())
    }
}
