/// Declares the page's reactive state in one place: a `Globals` struct with
/// one `RwSignal` per entry, a lazily built `globals()` and a free accessor
/// per entry.
///
/// ```ignore
/// signal_table! {
///     pub standings: StandingsTable = StandingsTable::default(),
///     pub live_visible: Option<bool> = None,
/// }
/// ```
#[macro_export]
macro_rules! signal_table {
    ( $( $vis:vis $name:ident : $ty:ty = $init:expr ),+ $(,)? ) => {
        pub struct Globals {
            $( pub $name: ::leptos::RwSignal<$ty>, )+
        }

        static GLOBALS: ::once_cell::sync::OnceCell<Globals> = ::once_cell::sync::OnceCell::new();

        pub fn globals() -> &'static Globals {
            GLOBALS.get_or_init(|| Globals {
                $( $name: ::leptos::create_rw_signal($init), )+
            })
        }

        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                globals().$name
            }
        )+
    };
}
