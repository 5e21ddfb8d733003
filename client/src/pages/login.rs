//! Login page placeholder. The form is static and submits nowhere.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::auth_card::{AuthCard, FormField};
use crate::util::guard::{SIGNUP_PATH, View};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text=View::Login.title()/>
        <AuthCard
            heading="Sign in to your account"
            alt_prompt="Don't have an account?"
            alt_label="Sign up"
            alt_href=SIGNUP_PATH
        >
            <form on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <FormField label="Email" name="email" kind="email" placeholder="you@example.com"/>
                <FormField label="Password" name="password" kind="password" placeholder="••••••••"/>
                <button
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 rounded-lg font-semibold transition-colors"
                    type="submit"
                >
                    "Log In"
                </button>
            </form>
        </AuthCard>
    }
}
