//! Account administration: create users, filter and delete existing ones.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading::LoadingSpinner;
use crate::components::registration_section::registration_form;
use crate::net::types::{Role, User};
use crate::state::drafts::UserDraft;
use crate::state::loadable::Loadable;
use crate::state::session::SessionState;
use crate::state::users::UsersState;
use crate::util::auth::api_client;

#[component]
pub fn UserManagement() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = RwSignal::new(UsersState::default());
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        let client = api_client(session);
        spawn_local(async move {
            let result = client.fetch_users().await;
            users.update(|u| u.list_loaded(result));
        });
    });

    let refetch = Callback::new(move |()| reload.update(|n| *n += 1));

    let on_confirm = Callback::new(move |()| {
        let Some(id) = users.try_update(UsersState::confirm_delete).flatten() else {
            return;
        };
        let client = api_client(session);
        spawn_local(async move {
            let result = client.delete_user(&id).await;
            let deleted = result.is_ok();
            users.update(|u| u.delete_finished(result));
            if deleted {
                refetch.run(());
            }
        });
    });
    let on_cancel = Callback::new(move |()| users.update(UsersState::cancel_delete));

    let list = move || {
        match users.with(|u| u.users.clone()) {
            Loadable::Loading => return view! { <LoadingSpinner label="Cargando usuarios..." /> }.into_any(),
            Loadable::Failed(message) => return view! { <p class="banner banner--error">{message}</p> }.into_any(),
            Loadable::Ready(_) => {}
        }
        let rows = users.with(UsersState::filtered);
        if rows.is_empty() {
            return view! { <p class="users__empty">"No hay usuarios para mostrar."</p> }.into_any();
        }
        view! {
            <ul class="users__list">
                {rows.into_iter().map(|user| user_row(user, users)).collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="users">
            <h2>"Gestión de Usuarios"</h2>
            <div class="users__grid">
                <div>
                    {registration_form::<UserDraft>(Some(refetch))}
                    {move || users.with(|u| u.error.clone()).map(|e| view! { <p class="banner banner--error">{e}</p> })}
                    {move || users.with(|u| u.success.clone()).map(|s| view! { <p class="banner banner--success">{s}</p> })}
                </div>
                <section class="panel">
                    <h3 class="panel__title">"Usuarios Existentes"</h3>
                    <input
                        class="form-field__input users__search"
                        type="text"
                        placeholder="Buscar usuarios..."
                        prop:value=move || users.with(|u| u.query.clone())
                        on:input=move |ev| users.update(|u| u.query = event_target_value(&ev))
                    />
                    {list}
                </section>
            </div>
            <Show when=move || users.with(|u| u.confirm_delete.is_some())>
                <ConfirmDialog
                    title="Confirmar eliminación de usuario"
                    message=users.with_untracked(|u| {
                        u.confirm_delete.as_ref().map_or_else(String::new, |user| {
                            format!(
                                "¿Estás seguro de que quieres eliminar al usuario «{}»? Esta acción no se puede deshacer.",
                                user.username
                            )
                        })
                    })
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

fn user_row(user: User, users: RwSignal<UsersState>) -> impl IntoView {
    let badge = if user.role == Role::Admin { "role-badge role-badge--admin" } else { "role-badge" };
    let busy = move || users.with(|u| u.deleting);
    let username = user.username.clone();
    let role = user.role.label();
    view! {
        <li class="users__row">
            <span class="users__name">{username}</span>
            <span class=badge>{role}</span>
            <button
                class="btn btn--small btn--danger"
                title="Eliminar usuario"
                disabled=busy
                on:click=move |_| users.update(|u| u.request_delete(user.clone()))
            >
                "Eliminar"
            </button>
        </li>
    }
}
