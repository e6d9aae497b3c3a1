pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color system */
  --primary: #3b82f6;
  --primary-dark: #2563eb;
  --secondary: #6b7280;
  --danger: #ef4444;
  --success: #22c55e;

  --neutral-100: #f3f4f6;
  --neutral-200: #e5e7eb;
  --neutral-300: #d1d5db;

  --background: #f9fafb;
  --surface: #ffffff;
  --text-primary: #111827;
  --text-secondary: #6b7280;

  /* Spacing scale */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;

  /* Radii and shadows */
  --radius-md: 0.375rem;
  --radius-lg: 0.5rem;
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.1);

  /* Motion */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);

  /* Layout */
  --header-height: 56px;
}
"#;
