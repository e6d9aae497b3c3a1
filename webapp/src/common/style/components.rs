pub const BASE_COMPONENTS: &str = r#"
.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 var(--space-4);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--neutral-100);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-200);
}

.btn-sm {
  padding: var(--space-1) var(--space-2);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Forms */
.form-select {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--neutral-300);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-label {
  display: block;
  margin-bottom: var(--space-1);
  color: var(--text-secondary);
  font-size: 0.875rem;
}

/* Page scaffolding */
.page-header {
  margin: var(--space-6) 0 var(--space-4);
}

.page-header p {
  color: var(--text-secondary);
}

.empty-state,
.error-state,
.loading-state {
  padding: var(--space-8);
  text-align: center;
  color: var(--text-secondary);
}

.error-state {
  color: var(--danger);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-sm);
  padding: var(--space-4);
}
"#;
