use leptos::prelude::*;

use crate::app::{use_dashboard, DashboardHandle};
use crate::bindings::Bindings;
use crate::components::status_badge::StatusBadge;
use crate::modal::ModalState;
use crate::models::{ExperienceLevel, ProfileDetail, ProfileDraft};
use crate::render::format_date;

#[component]
pub fn ProfileModal() -> impl IntoView {
    let dashboard = use_dashboard();
    let bindings = expect_context::<Bindings>();

    let close = move |_| dashboard.run(|d| d.close_modal());

    view! {
        <div
            id="profile-modal"
            class="modal"
            class:active=move || bindings.modal.with(ModalState::is_open)
            on:click=close
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3 id="modal-title">{move || bindings.modal.with(ModalState::title)}</h3>
                    <button class="modal-close" on:click=close>"\u{00d7}"</button>
                </div>
                <div id="modal-body" class="modal-body">
                    {move || match bindings.modal.get() {
                        ModalState::Closed => ().into_any(),
                        ModalState::Detail(detail) => detail_body(dashboard, detail),
                        ModalState::Create(draft) => view! { <CreateForm draft /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

fn detail_body(dashboard: DashboardHandle, detail: ProfileDetail) -> AnyView {
    let ProfileDetail { profile, stats, .. } = detail;
    let created = profile
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());

    let edit_name = profile.name.clone();
    let delete_name = profile.name.clone();
    let edit = move |_| dashboard.run(|d| d.edit_profile(&edit_name));
    let delete = move |_| {
        let name = delete_name.clone();
        dashboard.spawn(move |d| async move { d.delete_profile(&name).await });
    };

    view! {
        <div class="profile-detail">
            <h3>{profile.name.clone()}</h3>
            <p><strong>"Field: "</strong>{profile.career_field.clone()}</p>
            <p><strong>"Experience: "</strong>{profile.experience_level.to_string()}</p>
            <p><strong>"Created: "</strong>{created}</p>

            <div class="profile-status">
                <h4>"Profile Status"</h4>
                <ul class="status-list">
                    <StatusBadge label="Roadmap" status=stats.has_roadmap />
                    <StatusBadge label="Skills" status=stats.has_skills />
                    <StatusBadge label="Progress" status=stats.has_progress />
                </ul>
            </div>

            <div class="modal-actions">
                <button class="btn btn-primary" on:click=edit>"Edit Profile"</button>
                <button class="btn btn-secondary" on:click=delete>"Delete"</button>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn CreateForm(draft: ProfileDraft) -> impl IntoView {
    let dashboard = use_dashboard();
    let (name, set_name) = signal(draft.name);
    let (career_field, set_career_field) = signal(draft.career_field);
    let (level, set_level) = signal(draft.experience_level);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ProfileDraft {
            name: name.get_untracked(),
            career_field: career_field.get_untracked(),
            experience_level: level.get_untracked(),
        };
        dashboard.spawn(move |d| async move { d.submit_create(draft).await });
    };

    view! {
        <form id="new-profile-form" class="profile-form" on:submit=submit>
            <div class="form-group">
                <label for="profile-name">"Profile Name"</label>
                <input
                    id="profile-name"
                    type="text"
                    class="input"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="career-field">"Career Field"</label>
                <input
                    id="career-field"
                    type="text"
                    class="input"
                    required=true
                    prop:value=move || career_field.get()
                    on:input=move |ev| set_career_field.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="experience-level">"Experience Level"</label>
                <select
                    id="experience-level"
                    class="input"
                    on:change=move |ev| set_level.set(ExperienceLevel::from(event_target_value(&ev)))
                >
                    {ExperienceLevel::ALL
                        .into_iter()
                        .map(|option| {
                            let label = option.as_str().to_string();
                            let value = label.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || level.get() == option
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <button type="submit" class="btn btn-primary btn-block">"Create Profile"</button>
        </form>
    }
}
