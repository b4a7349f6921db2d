pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-200);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-300);
}

.btn-link {
  background: none;
  color: var(--primary);
  padding: 0;
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-2px);
  box-shadow: var(--shadow-md);
}

/* Form Elements */
.form-group {
  position: relative;
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea,
.form-select {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus,
.form-textarea:focus,
.form-select:focus {
  border-color: var(--primary);
  outline: none;
}

.form-input:read-only {
  background-color: var(--neutral-100);
}

.form-textarea {
  min-height: 120px;
  resize: vertical;
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
  margin-top: var(--space-1);
}

.form-check {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

/* Dropdown */
.dropdown {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  z-index: 20;
  max-height: 240px;
  overflow-y: auto;
  background-color: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-lg);
  list-style: none;
}

.dropdown-item {
  padding: var(--space-2) var(--space-3);
  cursor: pointer;
}

.dropdown-item:hover {
  background-color: var(--neutral-100);
}

/* Modal */
.modal {
  position: fixed;
  inset: var(--header-height) 0 auto 0;
  z-index: 30;
  padding: var(--space-6) var(--space-4);
  background-color: rgba(17, 24, 39, 0.4);
}

.modal .rent-form {
  max-width: var(--container-width);
  margin: 0 auto;
}

/* Loading placeholders */
.skeleton {
  background: linear-gradient(90deg, var(--neutral-200) 25%, var(--neutral-100) 50%, var(--neutral-200) 75%);
  background-size: 200% 100%;
  animation: shimmer 1.2s infinite;
  border-radius: var(--radius-lg);
  min-height: 280px;
}

@keyframes shimmer {
  0% { background-position: 200% 0; }
  100% { background-position: -200% 0; }
}

.muted {
  color: var(--text-tertiary);
}

.notice {
  padding: var(--space-6);
  text-align: center;
  color: var(--text-secondary);
}

.notice.error {
  color: var(--error);
}
"#;
