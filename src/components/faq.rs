//! FAQ Page
//!
//! Static care questions, each tagged with the species it applies to.

use leptos::prelude::*;

struct FaqEntry {
    question: &'static str,
    applicable: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "When do I switch to adult food from puppy/kitten food?",
        applicable: "Dogs and Cats",
        answer: "Switching a puppy or kitten to adult food too early can cause obesity \
                 and gastrointestinal issues. It is recommended to switch to adult dog or \
                 cat food between 10-12 months. Always check with your vet first.",
    },
    FaqEntry {
        question: "How often do I need to bathe my dog?",
        applicable: "Dogs",
        answer: "If no skin condition is present, you can bathe your dog every 4-6 weeks. \
                 In some cases, you may need to bathe them more often than that, but no \
                 more than once a week. It is important to use pet shampoos (not people \
                 shampoos) in order to not damage or cause allergy outbreaks on your \
                 pet's skin.",
    },
    FaqEntry {
        question: "How much sunshine does my reptile need daily?",
        applicable: "Reptiles",
        answer: "Reptiles need to have the standard 12 hours of daylight and 12 hours of \
                 nighttime. During the day, they need a light that offers the complete \
                 spectrum, with both UVA and UVB rays. This is necessary for the proper \
                 production of vitamin D3, which helps them to metabolize calcium and \
                 grow healthy bones.",
    },
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="page faq-page">
            <h1>"Frequently Asked Questions"</h1>
            {FAQ_ENTRIES
                .iter()
                .map(|entry| {
                    view! {
                        <div class="card faq-card">
                            <h3 class="card-title">{entry.question}</h3>
                            <p class="faq-applicable">"Applicable: " {entry.applicable}</p>
                            <p>{entry.answer}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
