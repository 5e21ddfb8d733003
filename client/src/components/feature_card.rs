//! Card used in the landing page feature grid.

#[cfg(test)]
#[path = "feature_card_test.rs"]
mod feature_card_test;

use leptos::prelude::*;

/// One feature highlight; `tint` picks the background gradient.
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    tint: FeatureTint,
) -> impl IntoView {
    let class = format!(
        "text-center p-6 rounded-xl hover:shadow-lg transition-shadow bg-gradient-to-br {}",
        tint.gradient()
    );

    view! {
        <div class=class>
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-3">{title}</h3>
            <p class="text-gray-600">{body}</p>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureTint {
    Blue,
    Purple,
    Green,
}

impl FeatureTint {
    // Full literals so the Tailwind content scan picks the classes up.
    pub const fn gradient(self) -> &'static str {
        match self {
            Self::Blue => "from-blue-50 to-blue-100",
            Self::Purple => "from-purple-50 to-purple-100",
            Self::Green => "from-green-50 to-green-100",
        }
    }
}
