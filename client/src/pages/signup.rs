//! Sign-up page placeholder.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::auth_card::{AuthCard, FormField};
use crate::util::guard::{LOGIN_PATH, View};

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <Title text=View::SignUp.title()/>
        <AuthCard
            heading="Create your account"
            alt_prompt="Already have an account?"
            alt_label="Log in"
            alt_href=LOGIN_PATH
        >
            <form on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <FormField label="Name" name="name" kind="text" placeholder="Jane Smith"/>
                <FormField label="Email" name="email" kind="email" placeholder="you@example.com"/>
                <FormField label="Password" name="password" kind="password" placeholder="••••••••"/>
                <button
                    class="w-full bg-blue-600 hover:bg-blue-700 text-white py-2 rounded-lg font-semibold transition-colors"
                    type="submit"
                >
                    "Sign Up"
                </button>
            </form>
        </AuthCard>
    }
}
