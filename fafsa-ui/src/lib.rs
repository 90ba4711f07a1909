//! FAFSA Guide UI - server-rendered Tailwind components
//!
//! Every component is a pure function from a params struct to an HTML
//! fragment. Styling axes are closed enums resolved through
//! [`variant::resolve`], so the same inputs always produce the same markup.

pub mod alert;
pub mod button;
pub mod card;
pub mod controls;
pub mod html;
pub mod icons;
pub mod merge;
pub mod tooltip;
pub mod variant;

// Re-export main component functions
pub use alert::{AlertParams, AlertVariant, alert};
pub use button::{
    ButtonParams, ButtonSize, ButtonStyle, ButtonType, ButtonVariant, button, button_classes,
    link_button,
};
pub use card::{FeatureCardParams, StatTone, StatsCardParams, feature_card, stats_card};
pub use controls::{
    CheckboxParams, FieldState, InputParams, InputSize, InputType, RadioGroupParams, RadioOption,
    RadioOrientation, RadioParams, SelectOption, SelectParams, TextareaParams, checkbox, input,
    radio, radio_group, select, textarea,
};
pub use html::Attributes;
pub use icons::Icon;
pub use merge::merge_classes;
pub use tooltip::{
    TOOLTIP_SCRIPT, TooltipEvent, TooltipParams, TooltipPosition, TooltipState, help_tooltip,
    tooltip,
};
pub use variant::{UnknownVariant, VariantAxis, resolve};
