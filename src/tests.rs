use leptos::prelude::Owner;

pub(crate) fn init_executor() -> Owner {
    let _ = any_spawner::Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    owner
}

mod children;
