use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

// everything the app renders, bundled into one style element at the root
pub const RENTAL_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Application-specific styles */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-6) var(--space-4);
}

.app-header {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--neutral-100);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(15, 118, 110, 0.1);
}

.locale-switch {
  display: flex;
  gap: var(--space-1);
}

.locale-switch a.active {
  font-weight: 700;
}

/* Landing */
.hero {
  padding: var(--space-12) var(--space-4);
  background: linear-gradient(135deg, var(--primary-dark), var(--primary-light));
  color: var(--text-inverse);
}

.hero h1 {
  font-size: 2.5rem;
  margin-bottom: var(--space-6);
  text-align: center;
}

/* Search form */
.rent-form {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-4);
  align-items: end;
  padding: var(--space-6);
  background-color: var(--surface);
  color: var(--text-primary);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
}

.rent-form .form-error {
  grid-column: 1 / -1;
}

.rent-form-summary {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  padding: var(--space-3) var(--space-4);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  margin-bottom: var(--space-4);
}

/* Explore */
.explore-layout {
  display: grid;
  grid-template-columns: 260px 1fr;
  gap: var(--space-6);
}

.filters {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.listing-toolbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: var(--space-4);
}

.vehicle-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: var(--space-4);
}

.vehicle-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.vehicle-list .card {
  display: grid;
  grid-template-columns: 240px 1fr;
}

.vehicle-image {
  width: 100%;
  height: 160px;
  object-fit: cover;
  background-color: var(--neutral-100);
}

.vehicle-body {
  padding: var(--space-4);
}

.vehicle-specs {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin: var(--space-2) 0;
  font-size: 0.875rem;
  color: var(--text-secondary);
  list-style: none;
}

.vehicle-price {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--accent);
}

.booking-info {
  padding: var(--space-4);
  margin-bottom: var(--space-4);
}

.booking-info dt {
  font-weight: 600;
  color: var(--text-secondary);
}

.booking-info dd {
  margin-bottom: var(--space-2);
}

/* Pagination */
.pagination {
  display: flex;
  justify-content: center;
  gap: var(--space-2);
  margin-top: var(--space-6);
}

.pagination .btn.active {
  background-color: var(--primary);
  color: var(--text-inverse);
}

/* Account and contact */
.narrow {
  max-width: 560px;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.phone-inputs {
  display: grid;
  grid-template-columns: 96px 1fr;
  gap: var(--space-2);
}

.page-not-found {
  text-align: center;
}
"#
);
