use log::debug;
use shared::{DirectoryRepository, MockDirectory};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the record source the pages read from
#[derive(Clone)]
pub struct DirectoryHandle(Rc<dyn DirectoryRepository>);

impl DirectoryHandle {
    pub fn new(directory: impl DirectoryRepository + 'static) -> Self {
        Self(Rc::new(directory))
    }

    pub fn seeded() -> Self {
        Self::new(MockDirectory::seeded())
    }
}

impl PartialEq for DirectoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for DirectoryHandle {
    type Target = dyn DirectoryRepository;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct DirectoryProviderProps {
    /// Falls back to the seeded sample directory
    #[prop_or_default]
    pub directory: Option<DirectoryHandle>,
    pub children: Children,
}

#[function_component(DirectoryProvider)]
pub fn directory_provider(props: &DirectoryProviderProps) -> Html {
    let directory = {
        let initial = props.directory.clone();
        use_state(move || {
            debug!("Initializing directory context");
            initial.unwrap_or_else(DirectoryHandle::seeded)
        })
    };

    html! {
        <ContextProvider<DirectoryHandle> context={(*directory).clone()}>
            {props.children.clone()}
        </ContextProvider<DirectoryHandle>>
    }
}

/// The directory from context, or the seeded one outside a provider
#[hook]
pub fn use_directory() -> DirectoryHandle {
    use_context::<DirectoryHandle>().unwrap_or_else(DirectoryHandle::seeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_equality_is_identity() {
        let a = DirectoryHandle::seeded();
        let b = a.clone();
        let c = DirectoryHandle::seeded();

        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn test_handle_derefs_to_directory() {
        let handle = DirectoryHandle::seeded();
        assert_eq!(handle.certifications().len(), 3);
        assert_eq!(handle.credentials_for("zekken@gmail.com").len(), 2);
    }
}
