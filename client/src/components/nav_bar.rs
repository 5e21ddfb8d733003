//! Fixed top navigation bar with brand and auth links.

use leptos::prelude::*;

use crate::util::guard::{LOGIN_PATH, ROOT_PATH, SIGNUP_PATH};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=ROOT_PATH class="text-2xl font-bold text-blue-600">
                        "ProjectApp"
                    </a>
                    <div class="flex items-center space-x-4">
                        <a
                            href=LOGIN_PATH
                            class="text-gray-700 hover:text-blue-600 px-3 py-2 rounded-md text-sm font-medium transition-colors"
                        >
                            "Login"
                        </a>
                        <a
                            href=SIGNUP_PATH
                            class="bg-blue-600 hover:bg-blue-700 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
                        >
                            "Sign Up"
                        </a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
