//! Marketing landing page: navigation, hero, feature grid, footer.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::feature_card::{FeatureCard, FeatureTint};
use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::util::guard::{LOGIN_PATH, SIGNUP_PATH, View};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=View::Landing.title()/>
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100">
            <NavBar/>
            <Hero/>
            <Features/>
            <Footer/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-20 pb-16 lg:pt-32 lg:pb-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="lg:grid lg:grid-cols-2 lg:gap-12 items-center">
                    <div class="mb-12 lg:mb-0">
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-extrabold text-gray-900 leading-tight">
                            "Welcome to "
                            <span class="text-blue-600">"ProjectApp"</span>
                        </h1>
                        <p class="mt-6 text-xl text-gray-600 leading-relaxed">
                            "Your ultimate solution for managing projects efficiently and collaboratively. "
                            "Built with modern technology for the modern workplace."
                        </p>
                        <div class="mt-8 flex flex-col sm:flex-row gap-4">
                            <a
                                href=SIGNUP_PATH
                                class="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg text-lg font-semibold transition-all transform hover:-translate-y-1 hover:shadow-lg"
                            >
                                "Get Started"
                            </a>
                            <a
                                href=LOGIN_PATH
                                class="border border-gray-300 hover:border-gray-400 text-gray-700 hover:text-gray-900 px-8 py-3 rounded-lg text-lg font-semibold transition-all hover:shadow-md"
                            >
                                "Sign In"
                            </a>
                        </div>
                    </div>
                    <div class="flex justify-center lg:justify-end">
                        <div class="relative">
                            <div class="w-80 h-48 bg-white rounded-2xl shadow-2xl transform rotate-3 hover:rotate-0 transition-transform duration-300">
                                <div class="h-12 bg-gradient-to-r from-blue-500 to-purple-600 rounded-t-2xl"></div>
                                <div class="p-6 space-y-4">
                                    <div class="h-3 bg-gray-200 rounded-full"></div>
                                    <div class="h-3 bg-gray-200 rounded-full w-3/4"></div>
                                    <div class="h-3 bg-gray-200 rounded-full w-1/2"></div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-16 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900">"Why Choose ProjectApp?"</h2>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon="🚀"
                        title="Fast & Efficient"
                        body="Lightning-fast performance with intuitive user interface for seamless workflow."
                        tint=FeatureTint::Blue
                    />
                    <FeatureCard
                        icon="🔒"
                        title="Secure & Reliable"
                        body="Enterprise-grade security with 99.9% uptime guarantee for your peace of mind."
                        tint=FeatureTint::Purple
                    />
                    <FeatureCard
                        icon="👥"
                        title="Team Collaboration"
                        body="Real-time collaboration tools to keep your team connected and productive."
                        tint=FeatureTint::Green
                    />
                </div>
            </div>
        </section>
    }
}
