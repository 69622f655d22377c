use yew::prelude::*;

use limelight_shared::models::PromptTemplate;

#[derive(Properties, PartialEq)]
pub struct PromptTemplateCardProps {
    pub template: PromptTemplate,
    pub on_select: Callback<String>,
}

/// A clickable template that fills the extraction prompt editor.
#[function_component(PromptTemplateCard)]
pub fn prompt_template_card(props: &PromptTemplateCardProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let content = props.template.content.clone();
        Callback::from(move |_| on_select.emit(content.clone()))
    };

    html! {
        <button class="text-left border border-base-300 rounded-lg p-3 hover:border-primary" {onclick}>
            <h4 class="text-sm font-medium">{ &props.template.name }</h4>
            <p class="text-xs text-base-content/70 mt-1">{ &props.template.content }</p>
        </button>
    }
}
