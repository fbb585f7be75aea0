//! The Secuchat-CLI usage agreement and the prompt strings shown with it
//!
//! The agreement is printed byte-for-byte, followed by a single newline.

/// Full text of the usage agreement
pub const TERMS: &str = "
Secuchat-CLI — Usage Agreement
===============================

This self-hosted communication tool is for authorized red team operations only.

1. AUTHORIZED PERSONNEL ONLY
   - Access restricted to approved red team members
   - Must have current authorization for ongoing engagements
   - Unauthorized personnel are prohibited from using this system

2. ENGAGEMENT SCOPE COMPLIANCE
   - All communications must relate to authorized penetration testing activities
   - Stay within the defined scope of current engagements
   - Immediately cease communications if engagement scope changes or ends

3. OPERATIONAL SECURITY (OPSEC)
   - Maintain strict OPSEC protocols in all communications
   - Use appropriate code names and operational terminology
   - No real client names, IP addresses, or sensitive identifiers in plain text
   - Follow organization's communication security guidelines

4. PROFESSIONAL CONDUCT
   - Maintain professional standards at all times
   - No inappropriate, offensive, or unprofessional content
   - Respect all team members and operational requirements
   - Report security incidents or policy violations immediately

5. DATA HANDLING
   - No transmission of actual client data or credentials
   - Use this channel for coordination and tactical communication only
   - Sensitive findings should be documented through secure reporting channels
   - Follow organization's data classification and handling policies

6. SYSTEM SECURITY
   - Report any technical issues or security concerns immediately
   - Do not attempt to bypass or modify security controls
   - Use strong authentication credentials
   - Log out properly when sessions end

7. INCIDENT RESPONSE
   - Report compromise or unauthorized access immediately
   - Cease operations if legal or safety concerns arise
   - Follow organization's incident response procedures
   - Maintain operational logs as required

By accepting, you confirm you are authorized to participate in current 
red team operations and will use this tool in accordance with organizational 
policies and engagement parameters.
";

/// Question asked after the agreement; printed without a trailing newline
pub const PROMPT: &str = "Accept terms? (y/n): ";

/// Printed after an answer that is neither yes nor no
pub const REPROMPT: &str = "Enter y or n.";
