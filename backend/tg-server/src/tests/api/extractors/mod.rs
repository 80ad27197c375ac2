mod admitted_identity;
