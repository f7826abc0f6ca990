//! Defines the properties for the `ExplainerComponent`.

use common::config::ExplainerConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExplainerProps {
    /// Delay, live preview policy, remote analysis switch and starting
    /// locale. Read once when the component is created.
    #[prop_or_default]
    pub config: ExplainerConfig,
}
