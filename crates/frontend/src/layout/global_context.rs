use super::tabs::tab_labels::title_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Query-строка адреса: `?active=<ключ таба>`
#[derive(Debug, Default, Serialize, Deserialize)]
struct TabQuery {
    active: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстановить активную вкладку из `?active=` и синхронизировать URL
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: TabQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = query.active {
            let exists = self
                .opened
                .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
            if !exists {
                let title = title_for_key(&active_key);
                self.open_tab(&active_key, &title);
            } else {
                self.activate_tab(&active_key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string = serde_qs::to_string(&TabQuery {
                    active: Some(active_key),
                })
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    /// Открыть таб (или активировать уже открытый)
    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("📂 open tab '{}' ({})", key, title);
            self.opened.update(|tabs| tabs.push(Tab::new(key, title)));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.with_tab(key, |tab| {
            if tab.title != new_title {
                tab.title = new_title.to_string();
            }
        });
    }

    /// Пометить таб как содержащий несохранённые правки
    pub fn set_tab_dirty(&self, key: &str, dirty: bool) {
        let changed = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|t| t.key == key && t.dirty != dirty));
        if changed {
            self.with_tab(key, |tab| tab.dirty = dirty);
        }
    }

    /// Число табов с несохранёнными правками
    pub fn dirty_count(&self) -> usize {
        self.opened.with(|tabs| tabs.iter().filter(|t| t.dirty).count())
    }

    /// Закрыть таб; активным становится соседний слева
    pub fn close_tab(&self, key: &str) {
        let Some(index) = self.position(key) else {
            return;
        };
        log::debug!("📁 close tab '{}'", key);
        self.opened.update(|tabs| {
            tabs.remove(index);
        });

        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        if was_active {
            let next = self.opened.with_untracked(|tabs| {
                tabs.get(index.saturating_sub(1))
                    .or_else(|| tabs.first())
                    .map(|t| t.key.clone())
            });
            self.active.set(next);
        }
    }

    /// Закрыть таб по кнопке: при несохранённых правках спросить подтверждение
    pub fn request_close(&self, key: &str) {
        let dirty = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|t| t.key == key && t.dirty));
        if dirty {
            let confirmed = window()
                .and_then(|w| {
                    w.confirm_with_message("Есть несохранённые изменения. Закрыть без сохранения?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }
        self.close_tab(key);
    }

    /// Заменить таб другим на той же позиции (форма создания → дизайнер)
    pub fn replace_tab(&self, old_key: &str, new_key: &str, new_title: &str) {
        match self.position(old_key) {
            Some(index) if self.position(new_key).is_none() => {
                self.opened
                    .update(|tabs| tabs[index] = Tab::new(new_key, new_title));
                self.activate_tab(new_key);
            }
            _ => {
                self.close_tab(old_key);
                self.open_tab(new_key, new_title);
            }
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.opened
            .with_untracked(|tabs| tabs.iter().position(|t| t.key == key))
    }

    fn with_tab(&self, key: &str, f: impl FnOnce(&mut Tab)) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                f(tab);
            }
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
    pub dirty: bool,
}

impl Tab {
    fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            dirty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_query() {
        let query: TabQuery = serde_qs::from_str("active=a001_template_edit_42").unwrap();
        assert_eq!(query.active.as_deref(), Some("a001_template_edit_42"));

        let empty: TabQuery = serde_qs::from_str("").unwrap();
        assert_eq!(empty.active, None);

        let text = serde_qs::to_string(&TabQuery {
            active: Some("home".to_string()),
        })
        .unwrap();
        assert_eq!(text, "active=home");
    }
}
