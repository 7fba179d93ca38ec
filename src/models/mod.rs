pub mod arrivage;
pub mod compagnie;
pub mod devise;
pub mod navire;
pub mod pays;
pub mod pesage;
pub mod planning;
pub mod port;
pub mod site;
pub mod surveillant;
pub mod ville;
pub mod zone_destination;

pub use arrivage::{Arrivage, ArrivageSection, ArrivageView};
pub use compagnie::{CompagnieMaritime, CompagnieView};
pub use devise::Devise;
pub use navire::{Navire, NavireView};
pub use pays::Pays;
pub use pesage::{Pesage, Tonnes};
pub use planning::{PlanningArrivage, PlanningStatus};
pub use port::{Port, PortView};
pub use site::{Site, SiteView};
pub use surveillant::{Surveillant, SurveillantType, SurveillantView};
pub use ville::{Ville, VilleView};
pub use zone_destination::{ZoneDestination, ZoneDestinationView};

pub(crate) fn default_true() -> bool {
    true
}
