//! Centered card layout shared by the login and sign-up pages.

use leptos::prelude::*;

/// Card with a heading, form content, and a footer link to the sibling page.
#[component]
pub fn AuthCard(
    heading: &'static str,
    alt_prompt: &'static str,
    alt_label: &'static str,
    alt_href: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 px-4">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-xl p-8">
                <a href="/" class="block text-center text-2xl font-bold text-blue-600 mb-2">
                    "ProjectApp"
                </a>
                <h1 class="text-center text-xl font-semibold text-gray-900 mb-6">{heading}</h1>
                {children()}
                <p class="mt-6 text-center text-sm text-gray-600">
                    {alt_prompt}
                    " "
                    <a href=alt_href class="font-medium text-blue-600 hover:text-blue-700">
                        {alt_label}
                    </a>
                </p>
            </div>
        </div>
    }
}

/// Labeled input row. Inputs are inert placeholders.
#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="block mb-4">
            <span class="block text-sm font-medium text-gray-700 mb-1">{label}</span>
            <input
                class="w-full border border-gray-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                type=kind
                name=name
                placeholder=placeholder
            />
        </label>
    }
}
