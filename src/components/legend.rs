//! Static legend beside the diagrams: what each cluster color stands for and
//! the tools the architecture uses.

use leptos::prelude::*;

/// Legend categories, matching the cluster labels.
pub const CATEGORIES: &[&str] = &[
	"🎨 User Interaction",
	"⚙️ Backend Processing",
	"🛠️ Pre-Processing",
	"🔍 Query Retrieval",
	"🧠 AI Processing",
	"📊 Post-Processing",
];

/// Technologies named in the diagrams.
pub const TOOLS: &[&str] = &[
	"⚛️ React",
	"🚀 Express",
	"📡 Axios",
	"🟢 Node.js",
	"🗄️ MySQL",
	"🔴 Redis",
	"🤗 LLM Model (Hugging Face API/Open AI/DeepSeek/Own Model)",
	"🔗 LangChain",
	"📚 VectorDB",
	"☸️ Kubernetes",
	"📈 Prometheus",
];

/// Legend and tools lists.
#[component]
pub fn Legend() -> impl IntoView {
	let list = |items: &'static [&'static str]| {
		items
			.iter()
			.map(|item| view! { <li>{*item}</li> })
			.collect_view()
	};

	view! {
		<aside class="legend">
			<div class="legend-section">
				<strong>"Legend:"</strong>
				<ul>{list(CATEGORIES)}</ul>
			</div>
			<div class="legend-section">
				<strong>"Tools:"</strong>
				<ul>{list(TOOLS)}</ul>
			</div>
		</aside>
	}
}
