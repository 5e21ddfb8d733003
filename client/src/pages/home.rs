//! Home page shown to authenticated users only.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::footer::Footer;
use crate::util::guard::View;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=View::Home.title()/>
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center">
                    <h2 class="text-2xl font-bold text-blue-600">"ProjectApp"</h2>
                </div>
            </header>
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <h1 class="text-3xl font-bold text-gray-900">"Home"</h1>
                <p class="mt-4 text-gray-600">"You are signed in. Your projects will appear here."</p>
            </main>
            <Footer/>
        </div>
    }
}
