use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{TEMPLATE_CREATE, TEMPLATE_LIST};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let open = move |key: &'static str| tabs_store.open_tab(key, tab_label_for_key(key));

    view! {
        <div class="home-page">
            <div class="home-page__hero">
                {icon("layout-template")}
                <h1 class="page__title">"Конструктор шаблонов"</h1>
                <p class="home-page__description">
                    "Собирайте документы из текста, таблиц, диаграмм и полей формы, "
                    "описывайте входные данные схемой и заполняйте готовые шаблоны."
                </p>
                <Flex gap=FlexGap::Medium justify=FlexJustify::Center>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open(TEMPLATE_CREATE)>
                        {icon("plus")}
                        " Создать шаблон"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| open(TEMPLATE_LIST)>
                        {icon("list")}
                        " Все шаблоны"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
