use crate::utils::error::Result;
use crate::utils::format::{section_header, sorted_display, subsection_header};
use std::collections::HashSet;
use std::io::Write;

pub fn practical_applications(out: &mut dyn Write) -> Result<()> {
    section_header(out, "9. PRACTICAL APPLICATIONS")?;

    subsection_header(out, "1. Data Cleaning and Deduplication")?;

    let customer_emails = vec![
        "user1@example.com",
        "user2@example.com",
        "user1@example.com",
        "user3@example.com",
        "user2@example.com",
        "user4@example.com",
    ];

    let unique_emails: HashSet<&str> = customer_emails.iter().copied().collect();
    writeln!(out, "Original emails ({}): {:?}", customer_emails.len(), customer_emails)?;
    writeln!(
        out,
        "Unique emails ({}): {}",
        unique_emails.len(),
        sorted_display(unique_emails.iter().copied())
    )?;
    writeln!(
        out,
        "Duplicates removed: {}",
        customer_emails.len() - unique_emails.len()
    )?;

    subsection_header(out, "2. Inventory Overlap")?;

    let store_a: HashSet<&str> = ["laptop", "mouse", "keyboard", "monitor", "speakers"]
        .into_iter()
        .collect();
    let store_b: HashSet<&str> = ["laptop", "tablet", "headphones", "monitor", "webcam"]
        .into_iter()
        .collect();

    writeln!(out, "Store A: {}", sorted_display(store_a.iter().copied()))?;
    writeln!(out, "Store B: {}", sorted_display(store_b.iter().copied()))?;
    writeln!(out, "Available in both: {}", sorted_display(&store_a & &store_b))?;
    writeln!(out, "Only in Store A:   {}", sorted_display(&store_a - &store_b))?;
    writeln!(out, "Only in Store B:   {}", sorted_display(&store_b - &store_a))?;

    subsection_header(out, "3. Access Control")?;

    let admin_roles: HashSet<&str> = ["create_user", "delete_user", "view_logs", "backup_data"]
        .into_iter()
        .collect();
    let extra: HashSet<&str> = ["special_feature"].into_iter().collect();
    let user_permissions = &admin_roles | &extra;

    writeln!(out, "Admin roles:      {}", sorted_display(admin_roles.iter().copied()))?;
    writeln!(out, "User permissions: {}", sorted_display(user_permissions.iter().copied()))?;
    writeln!(out, "Can delete users: {}", user_permissions.contains("delete_user"))?;
    writeln!(out, "Can edit content: {}", user_permissions.contains("edit_content"))?;

    subsection_header(out, "4. Survey Analysis")?;

    let group_a: HashSet<&str> = ["satisfied", "very_satisfied", "neutral"].into_iter().collect();
    let group_b: HashSet<&str> = ["dissatisfied", "neutral", "satisfied"].into_iter().collect();
    let group_c: HashSet<&str> = ["very_satisfied", "satisfied", "very_dissatisfied"]
        .into_iter()
        .collect();

    writeln!(out, "Group A: {}", sorted_display(group_a.iter().copied()))?;
    writeln!(out, "Group B: {}", sorted_display(group_b.iter().copied()))?;
    writeln!(out, "Group C: {}", sorted_display(group_c.iter().copied()))?;
    writeln!(
        out,
        "Common across all groups: {}",
        sorted_display(&(&group_a & &group_b) & &group_c)
    )?;
    writeln!(
        out,
        "All responses seen:       {}",
        sorted_display(&(&group_a | &group_b) | &group_c)
    )?;

    subsection_header(out, "5. Social Graph Queries")?;

    let alice: HashSet<&str> = ["bob", "charlie", "diana"].into_iter().collect();
    let bob: HashSet<&str> = ["alice", "charlie", "eve"].into_iter().collect();
    let charlie: HashSet<&str> = ["alice", "bob", "frank"].into_iter().collect();

    writeln!(out, "Alice's friends: {}", sorted_display(alice.iter().copied()))?;
    writeln!(out, "Bob's friends:   {}", sorted_display(bob.iter().copied()))?;
    writeln!(out, "Mutual friends:  {}", sorted_display(&alice & &bob))?;

    let herself: HashSet<&str> = ["alice"].into_iter().collect();
    let potential = &(&(&bob | &charlie) - &alice) - &herself;
    writeln!(out, "Friends-of-friends Alice has not met: {}", sorted_display(potential))?;

    Ok(())
}
